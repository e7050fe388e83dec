use bls::{AggregateSignatureBytes, SignatureBytes};
use ssz::{BitVector, ContiguousList};
use types::{
    altair::containers as internal,
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

use crate::conversion::wire_container;

wire_container! {
    pub struct BeaconBlock for internal::BeaconBlock {
        slot: Slot,
        proposer_index: ValidatorIndex,
        parent_root: H256,
        state_root: H256,
        body: internal::BeaconBlockBody,
    }
}

wire_container! {
    pub struct BeaconBlockBody for internal::BeaconBlockBody {
        randao_reveal: SignatureBytes,
        eth1_data: Eth1Data,
        graffiti: H256,
        proposer_slashings: ContiguousList<ProposerSlashing, MaxProposerSlashings>,
        attester_slashings: ContiguousList<AttesterSlashing, MaxAttesterSlashings>,
        attestations: ContiguousList<Attestation, MaxAttestations>,
        deposits: ContiguousList<Deposit, MaxDeposits>,
        voluntary_exits: ContiguousList<SignedVoluntaryExit, MaxVoluntaryExits>,
        sync_aggregate: internal::SyncAggregate,
    }
}

wire_container! {
    pub struct SignedBeaconBlock for internal::SignedBeaconBlock {
        message: internal::BeaconBlock,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct SyncAggregate for internal::SyncAggregate {
        sync_committee_bits: BitVector<SyncCommitteeSize>,
        sync_committee_signature: AggregateSignatureBytes,
    }
}
