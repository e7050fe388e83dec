use bls::SignatureBytes;
use ssz::{ByteList, ByteVector, ContiguousList};
use types::{
    altair::containers::SyncAggregate,
    bellatrix::primitives::{Gas, Transaction, Wei},
    capella::containers::{SignedBlsToExecutionChange, Withdrawal},
    deneb::{
        containers as internal,
        primitives::{Blob, BlobIndex, KzgCommitment, KzgProof},
    },
    phase0::{
        containers::{
            Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing,
            SignedVoluntaryExit,
        },
        primitives::{ExecutionAddress, ExecutionBlockHash, Slot, ValidatorIndex, H256},
    },
    preset::{
        BytesPerLogsBloom, MaxAttestations, MaxAttesterSlashings, MaxBlobCommitmentsPerBlock,
        MaxBlobsPerBlock, MaxBlsToExecutionChanges, MaxDeposits, MaxExtraDataBytes,
        MaxProposerSlashings, MaxTransactionsPerPayload, MaxVoluntaryExits,
        MaxWithdrawalsPerPayload,
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
        sync_aggregate: SyncAggregate,
        execution_payload: internal::ExecutionPayload,
        bls_to_execution_changes:
            ContiguousList<SignedBlsToExecutionChange, MaxBlsToExecutionChanges>,
        blob_kzg_commitments: ContiguousList<KzgCommitment, MaxBlobCommitmentsPerBlock>,
    }
}

wire_container! {
    pub struct BlindedBeaconBlock for internal::BlindedBeaconBlock {
        slot: Slot,
        proposer_index: ValidatorIndex,
        parent_root: H256,
        state_root: H256,
        body: internal::BlindedBeaconBlockBody,
    }
}

wire_container! {
    pub struct BlindedBeaconBlockBody for internal::BlindedBeaconBlockBody {
        randao_reveal: SignatureBytes,
        eth1_data: Eth1Data,
        graffiti: H256,
        proposer_slashings: ContiguousList<ProposerSlashing, MaxProposerSlashings>,
        attester_slashings: ContiguousList<AttesterSlashing, MaxAttesterSlashings>,
        attestations: ContiguousList<Attestation, MaxAttestations>,
        deposits: ContiguousList<Deposit, MaxDeposits>,
        voluntary_exits: ContiguousList<SignedVoluntaryExit, MaxVoluntaryExits>,
        sync_aggregate: SyncAggregate,
        execution_payload_header: internal::ExecutionPayloadHeader,
        bls_to_execution_changes:
            ContiguousList<SignedBlsToExecutionChange, MaxBlsToExecutionChanges>,
        blob_kzg_commitments: ContiguousList<KzgCommitment, MaxBlobCommitmentsPerBlock>,
    }
}

wire_container! {
    pub struct BlindedBlobSidecar for internal::BlindedBlobSidecar {
        block_root: H256,
        index: BlobIndex,
        slot: Slot,
        block_parent_root: H256,
        proposer_index: ValidatorIndex,
        blob_root: H256,
        kzg_commitment: KzgCommitment,
        kzg_proof: KzgProof,
    }
}

wire_container! {
    pub struct BlindedBlockContents for internal::BlindedBlockContents {
        blinded_block: internal::BlindedBeaconBlock,
        blinded_blob_sidecars: ContiguousList<internal::BlindedBlobSidecar, MaxBlobsPerBlock>,
    }
}

wire_container! {
    pub struct BlobSidecar for internal::BlobSidecar {
        block_root: H256,
        index: BlobIndex,
        slot: Slot,
        block_parent_root: H256,
        proposer_index: ValidatorIndex,
        blob: Blob,
        kzg_commitment: KzgCommitment,
        kzg_proof: KzgProof,
    }
}

wire_container! {
    pub struct BlockContents for internal::BlockContents {
        block: internal::BeaconBlock,
        blob_sidecars: ContiguousList<internal::BlobSidecar, MaxBlobsPerBlock>,
    }
}

wire_container! {
    pub struct ExecutionPayload for internal::ExecutionPayload {
        parent_hash: ExecutionBlockHash,
        fee_recipient: ExecutionAddress,
        state_root: H256,
        receipts_root: H256,
        logs_bloom: ByteVector<BytesPerLogsBloom>,
        prev_randao: H256,
        block_number: u64,
        gas_limit: Gas,
        gas_used: Gas,
        timestamp: u64,
        extra_data: ByteList<MaxExtraDataBytes>,
        base_fee_per_gas: Wei,
        block_hash: ExecutionBlockHash,
        transactions: ContiguousList<Transaction, MaxTransactionsPerPayload>,
        withdrawals: ContiguousList<Withdrawal, MaxWithdrawalsPerPayload>,
        blob_gas_used: Gas,
        excess_blob_gas: Gas,
    }
}

wire_container! {
    pub struct ExecutionPayloadHeader for internal::ExecutionPayloadHeader {
        parent_hash: ExecutionBlockHash,
        fee_recipient: ExecutionAddress,
        state_root: H256,
        receipts_root: H256,
        logs_bloom: ByteVector<BytesPerLogsBloom>,
        prev_randao: H256,
        block_number: u64,
        gas_limit: Gas,
        gas_used: Gas,
        timestamp: u64,
        extra_data: ByteList<MaxExtraDataBytes>,
        base_fee_per_gas: Wei,
        block_hash: ExecutionBlockHash,
        transactions_root: H256,
        withdrawals_root: H256,
        blob_gas_used: Gas,
        excess_blob_gas: Gas,
    }
}

wire_container! {
    pub struct SignedBeaconBlock for internal::SignedBeaconBlock {
        message: internal::BeaconBlock,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct SignedBlindedBeaconBlock for internal::SignedBlindedBeaconBlock {
        message: internal::BlindedBeaconBlock,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct SignedBlindedBlobSidecar for internal::SignedBlindedBlobSidecar {
        message: internal::BlindedBlobSidecar,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct SignedBlindedBlockContents for internal::SignedBlindedBlockContents {
        signed_blinded_block: internal::SignedBlindedBeaconBlock,
        signed_blinded_blob_sidecars:
            ContiguousList<internal::SignedBlindedBlobSidecar, MaxBlobsPerBlock>,
    }
}

wire_container! {
    pub struct SignedBlobSidecar for internal::SignedBlobSidecar {
        message: internal::BlobSidecar,
        signature: SignatureBytes,
    }
}

wire_container! {
    pub struct SignedBlockContents for internal::SignedBlockContents {
        signed_block: internal::SignedBeaconBlock,
        signed_blob_sidecars: ContiguousList<internal::SignedBlobSidecar, MaxBlobsPerBlock>,
    }
}
