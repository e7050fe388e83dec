// The Beacon Node API represents integers as decimal strings.
// Error codes are the only exception and are serialized as native numbers.

use core::fmt::Display;

use serde::Serializer;

pub fn serialize<S: Serializer>(value: impl Display, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value)
}
