use bls::{AggregateSignatureBytes, PublicKeyBytes, SignatureBytes};
use ssz::{BitList, ContiguousList, ContiguousVector};
use types::{
    phase0::{
        consts::DepositProofLength,
        containers as internal,
        primitives::{
            CommitteeIndex, DepositIndex, Epoch, ExecutionBlockHash, Gwei, Slot, ValidatorIndex,
            H256,
        },
    },
    preset::{
        MaxAttestations, MaxAttesterSlashings, MaxDeposits, MaxProposerSlashings,
        MaxValidatorsPerCommittee, MaxVoluntaryExits,
    },
};

use crate::conversion::wire_container;

wire_container! {
    pub struct Attestation for internal::Attestation {
        aggregation_bits: BitList<MaxValidatorsPerCommittee>,
        data: internal::AttestationData,
        signature: AggregateSignatureBytes,
    }
}

wire_container! {
    pub struct AttestationData for internal::AttestationData {
        slot: Slot,
        index: CommitteeIndex,
        beacon_block_root: H256,
        source: internal::Checkpoint,
        target: internal::Checkpoint,
    }
}

wire_container! {
    pub struct AttesterSlashing for internal::AttesterSlashing {
        attestation_1: internal::IndexedAttestation,
        attestation_2: internal::IndexedAttestation,
    }
}

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
        eth1_data: internal::Eth1Data,
        graffiti: H256,
        proposer_slashings: ContiguousList<internal::ProposerSlashing, MaxProposerSlashings>,
        attester_slashings: ContiguousList<internal::AttesterSlashing, MaxAttesterSlashings>,
        attestations: ContiguousList<internal::Attestation, MaxAttestations>,
        deposits: ContiguousList<internal::Deposit, MaxDeposits>,
        voluntary_exits: ContiguousList<internal::SignedVoluntaryExit, MaxVoluntaryExits>,
    }
}

wire_container! {
    pub struct BeaconBlockHeader for internal::BeaconBlockHeader {
        slot: Slot,
        proposer_index: ValidatorIndex,
        parent_root: H256,
        state_root: H256,
        body_root: H256,
    }
}

wire_container! {
    pub struct Checkpoint for internal::Checkpoint {
        epoch: Epoch,
        root: H256,
    }
}

wire_container! {
    pub struct Deposit for internal::Deposit {
        proof: ContiguousVector<H256, DepositProofLength>,
        data: internal::DepositData,
    }
}

wire_container! {
    pub struct DepositData for internal::DepositData {
        pubkey: PublicKeyBytes,
        withdrawal_credentials: H256,
        amount: Gwei,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct Eth1Data for internal::Eth1Data {
        deposit_root: H256,
        deposit_count: DepositIndex,
        block_hash: ExecutionBlockHash,
    }
}

wire_container! {
    pub struct IndexedAttestation for internal::IndexedAttestation {
        attesting_indices: ContiguousList<ValidatorIndex, MaxValidatorsPerCommittee>,
        data: internal::AttestationData,
        signature: AggregateSignatureBytes,
    }
}

wire_container! {
    pub struct ProposerSlashing for internal::ProposerSlashing {
        signed_header_1: internal::SignedBeaconBlockHeader,
        signed_header_2: internal::SignedBeaconBlockHeader,
    }
}

wire_container! {
    pub struct SignedBeaconBlock for internal::SignedBeaconBlock {
        message: internal::BeaconBlock,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct SignedBeaconBlockHeader for internal::SignedBeaconBlockHeader {
        message: internal::BeaconBlockHeader,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct SignedVoluntaryExit for internal::SignedVoluntaryExit {
        message: internal::VoluntaryExit,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct VoluntaryExit for internal::VoluntaryExit {
        epoch: Epoch,
        validator_index: ValidatorIndex,
    }
}
