use enum_iterator::Sequence;
use serde_with::SerializeDisplay;
use strum::{AsRefStr, Display};

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Sequence,
    AsRefStr,
    Display,
    SerializeDisplay,
)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Phase0,
    Altair,
    Bellatrix,
    Capella,
    Deneb,
}
