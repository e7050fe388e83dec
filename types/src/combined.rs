use derive_more::From;
use duplicate::duplicate_item;
use enum_iterator::Sequence as _;
use ssz::{Size, SszSize, SszWrite, WriteError};
use static_assertions::const_assert_eq;

use crate::{
    altair::containers::{
        BeaconBlock as AltairBeaconBlock, SignedBeaconBlock as AltairSignedBeaconBlock,
    },
    bellatrix::containers::{
        BeaconBlock as BellatrixBeaconBlock, BlindedBeaconBlock as BellatrixBlindedBeaconBlock,
        SignedBeaconBlock as BellatrixSignedBeaconBlock,
        SignedBlindedBeaconBlock as BellatrixSignedBlindedBeaconBlock,
    },
    capella::containers::{
        BeaconBlock as CapellaBeaconBlock, BlindedBeaconBlock as CapellaBlindedBeaconBlock,
        SignedBeaconBlock as CapellaSignedBeaconBlock,
        SignedBlindedBeaconBlock as CapellaSignedBlindedBeaconBlock,
    },
    deneb::containers::{
        BlindedBlockContents as DenebBlindedBlockContents,
        BlockContents as DenebBlockContents,
        SignedBlindedBlockContents as DenebSignedBlindedBlockContents,
        SignedBlockContents as DenebSignedBlockContents,
    },
    nonstandard::Phase,
    phase0::{
        containers::{
            BeaconBlock as Phase0BeaconBlock, SignedBeaconBlock as Phase0SignedBeaconBlock,
        },
        primitives::{Slot, ValidatorIndex, H256},
    },
};

/// A signed block of any phase as submitted to the publishing endpoints.
///
/// Deneb blocks are submitted together with their signed blob sidecars.
/// Blocks before Bellatrix have no blinded form.
#[derive(Clone, PartialEq, Eq, Debug, From)]
pub enum GenericSignedBlock {
    Phase0(Phase0SignedBeaconBlock),
    Altair(AltairSignedBeaconBlock),
    Bellatrix(BellatrixSignedBeaconBlock),
    BlindedBellatrix(BellatrixSignedBlindedBeaconBlock),
    Capella(CapellaSignedBeaconBlock),
    BlindedCapella(CapellaSignedBlindedBeaconBlock),
    Deneb(DenebSignedBlockContents),
    BlindedDeneb(DenebSignedBlindedBlockContents),
}

/// An unsigned block of any phase as returned by block production.
#[derive(Clone, PartialEq, Eq, Debug, From)]
pub enum GenericBeaconBlock {
    Phase0(Phase0BeaconBlock),
    Altair(AltairBeaconBlock),
    Bellatrix(BellatrixBeaconBlock),
    BlindedBellatrix(BellatrixBlindedBeaconBlock),
    Capella(CapellaBeaconBlock),
    BlindedCapella(CapellaBlindedBeaconBlock),
    Deneb(DenebBlockContents),
    BlindedDeneb(DenebBlindedBlockContents),
}

// Both unions will need new variants if more phases are added.
const_assert_eq!(Phase::CARDINALITY, 5);

impl SszSize for GenericSignedBlock {
    const SIZE: Size = Size::for_untagged_union([
        Phase0SignedBeaconBlock::SIZE,
        AltairSignedBeaconBlock::SIZE,
        BellatrixSignedBeaconBlock::SIZE,
        BellatrixSignedBlindedBeaconBlock::SIZE,
        CapellaSignedBeaconBlock::SIZE,
        CapellaSignedBlindedBeaconBlock::SIZE,
        DenebSignedBlockContents::SIZE,
        DenebSignedBlindedBlockContents::SIZE,
    ]);
}

impl SszSize for GenericBeaconBlock {
    const SIZE: Size = Size::for_untagged_union([
        Phase0BeaconBlock::SIZE,
        AltairBeaconBlock::SIZE,
        BellatrixBeaconBlock::SIZE,
        BellatrixBlindedBeaconBlock::SIZE,
        CapellaBeaconBlock::SIZE,
        CapellaBlindedBeaconBlock::SIZE,
        DenebBlockContents::SIZE,
        DenebBlindedBlockContents::SIZE,
    ]);
}

#[duplicate_item(
    implementor;
    [GenericSignedBlock];
    [GenericBeaconBlock];
)]
impl SszWrite for implementor {
    fn write_variable(&self, bytes: &mut Vec<u8>) -> Result<(), WriteError> {
        match self {
            Self::Phase0(block) => block.write_variable(bytes),
            Self::Altair(block) => block.write_variable(bytes),
            Self::Bellatrix(block) => block.write_variable(bytes),
            Self::BlindedBellatrix(block) => block.write_variable(bytes),
            Self::Capella(block) => block.write_variable(bytes),
            Self::BlindedCapella(block) => block.write_variable(bytes),
            Self::Deneb(block) => block.write_variable(bytes),
            Self::BlindedDeneb(block) => block.write_variable(bytes),
        }
    }
}

impl GenericSignedBlock {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Phase0(_) => Phase::Phase0,
            Self::Altair(_) => Phase::Altair,
            Self::Bellatrix(_) | Self::BlindedBellatrix(_) => Phase::Bellatrix,
            Self::Capella(_) | Self::BlindedCapella(_) => Phase::Capella,
            Self::Deneb(_) | Self::BlindedDeneb(_) => Phase::Deneb,
        }
    }

    #[must_use]
    pub const fn is_blinded(&self) -> bool {
        matches!(
            self,
            Self::BlindedBellatrix(_) | Self::BlindedCapella(_) | Self::BlindedDeneb(_),
        )
    }

    #[duplicate_item(
        field               field_type;
        [slot]              [Slot];
        [proposer_index]    [ValidatorIndex];
        [parent_root]       [H256];
    )]
    #[must_use]
    pub const fn field(&self) -> field_type {
        match self {
            Self::Phase0(block) => block.message.field,
            Self::Altair(block) => block.message.field,
            Self::Bellatrix(block) => block.message.field,
            Self::BlindedBellatrix(block) => block.message.field,
            Self::Capella(block) => block.message.field,
            Self::BlindedCapella(block) => block.message.field,
            Self::Deneb(contents) => contents.signed_block.message.field,
            Self::BlindedDeneb(contents) => contents.signed_blinded_block.message.field,
        }
    }
}

impl GenericBeaconBlock {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Phase0(_) => Phase::Phase0,
            Self::Altair(_) => Phase::Altair,
            Self::Bellatrix(_) | Self::BlindedBellatrix(_) => Phase::Bellatrix,
            Self::Capella(_) | Self::BlindedCapella(_) => Phase::Capella,
            Self::Deneb(_) | Self::BlindedDeneb(_) => Phase::Deneb,
        }
    }

    #[must_use]
    pub const fn is_blinded(&self) -> bool {
        matches!(
            self,
            Self::BlindedBellatrix(_) | Self::BlindedCapella(_) | Self::BlindedDeneb(_),
        )
    }

    #[duplicate_item(
        field               field_type;
        [slot]              [Slot];
        [proposer_index]    [ValidatorIndex];
        [parent_root]       [H256];
    )]
    #[must_use]
    pub const fn field(&self) -> field_type {
        match self {
            Self::Phase0(block) => block.field,
            Self::Altair(block) => block.field,
            Self::Bellatrix(block) => block.field,
            Self::BlindedBellatrix(block) => block.field,
            Self::Capella(block) => block.field,
            Self::BlindedCapella(block) => block.field,
            Self::Deneb(contents) => contents.block.field,
            Self::BlindedDeneb(contents) => contents.blinded_block.field,
        }
    }
}
