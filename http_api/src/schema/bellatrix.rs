use bls::SignatureBytes;
use ssz::{ByteList, ByteVector, ContiguousList};
use types::{
    altair::containers::SyncAggregate,
    bellatrix::{
        containers as internal,
        primitives::{Gas, Transaction, Wei},
    },
    phase0::{
        containers::{
            Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing,
            SignedVoluntaryExit,
        },
        primitives::{ExecutionAddress, ExecutionBlockHash, Slot, ValidatorIndex, H256},
    },
    preset::{
        BytesPerLogsBloom, MaxAttestations, MaxAttesterSlashings, MaxDeposits, MaxExtraDataBytes,
        MaxProposerSlashings, MaxTransactionsPerPayload, MaxVoluntaryExits,
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
