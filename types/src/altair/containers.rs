use bls::{AggregateSignatureBytes, SignatureBytes};
use ssz::{BitVector, ContiguousList, Ssz};

use crate::{
    phase0::{
        containers::{
            Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing,
            SignedVoluntaryExit,
        },
        primitives::{Slot, ValidatorIndex, H256},
    },
    preset::{
        MaxAttestations, MaxAttesterSlashings, MaxDeposits, MaxProposerSlashings,
        MaxVoluntaryExits, SyncCommitteeSize,
    },
};

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct BeaconBlock {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: H256,
    pub state_root: H256,
    pub body: BeaconBlockBody,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct BeaconBlockBody {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: H256,
    pub proposer_slashings: ContiguousList<ProposerSlashing, MaxProposerSlashings>,
    pub attester_slashings: ContiguousList<AttesterSlashing, MaxAttesterSlashings>,
    pub attestations: ContiguousList<Attestation, MaxAttestations>,
    pub deposits: ContiguousList<Deposit, MaxDeposits>,
    pub voluntary_exits: ContiguousList<SignedVoluntaryExit, MaxVoluntaryExits>,
    pub sync_aggregate: SyncAggregate,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    pub signature: SignatureBytes,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct SyncAggregate {
    pub sync_committee_bits: BitVector<SyncCommitteeSize>,
    pub sync_committee_signature: AggregateSignatureBytes,
}
