use bls::{PublicKeyBytes, SignatureBytes};
use ssz::{ByteList, ByteVector, ContiguousList, Ssz};

use crate::{
    altair::containers::SyncAggregate,
    bellatrix::primitives::{Gas, Transaction, Wei},
    capella::primitives::WithdrawalIndex,
    phase0::{
        containers::{
            Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing,
            SignedVoluntaryExit,
        },
        primitives::{ExecutionAddress, ExecutionBlockHash, Gwei, Slot, ValidatorIndex, H256},
    },
    preset::{
        BytesPerLogsBloom, MaxAttestations, MaxAttesterSlashings, MaxBlsToExecutionChanges,
        MaxDeposits, MaxExtraDataBytes, MaxProposerSlashings, MaxTransactionsPerPayload,
        MaxVoluntaryExits, MaxWithdrawalsPerPayload,
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
    pub execution_payload: ExecutionPayload,
    pub bls_to_execution_changes:
        ContiguousList<SignedBlsToExecutionChange, MaxBlsToExecutionChanges>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct BlindedBeaconBlock {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: H256,
    pub state_root: H256,
    pub body: BlindedBeaconBlockBody,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct BlindedBeaconBlockBody {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: H256,
    pub proposer_slashings: ContiguousList<ProposerSlashing, MaxProposerSlashings>,
    pub attester_slashings: ContiguousList<AttesterSlashing, MaxAttesterSlashings>,
    pub attestations: ContiguousList<Attestation, MaxAttestations>,
    pub deposits: ContiguousList<Deposit, MaxDeposits>,
    pub voluntary_exits: ContiguousList<SignedVoluntaryExit, MaxVoluntaryExits>,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload_header: ExecutionPayloadHeader,
    pub bls_to_execution_changes:
        ContiguousList<SignedBlsToExecutionChange, MaxBlsToExecutionChanges>,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Ssz)]
pub struct BlsToExecutionChange {
    pub validator_index: ValidatorIndex,
    pub from_bls_pubkey: PublicKeyBytes,
    pub to_execution_address: ExecutionAddress,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct ExecutionPayload {
    pub parent_hash: ExecutionBlockHash,
    pub fee_recipient: ExecutionAddress,
    pub state_root: H256,
    pub receipts_root: H256,
    pub logs_bloom: ByteVector<BytesPerLogsBloom>,
    pub prev_randao: H256,
    pub block_number: u64,
    pub gas_limit: Gas,
    pub gas_used: Gas,
    pub timestamp: u64,
    pub extra_data: ByteList<MaxExtraDataBytes>,
    pub base_fee_per_gas: Wei,
    pub block_hash: ExecutionBlockHash,
    pub transactions: ContiguousList<Transaction, MaxTransactionsPerPayload>,
    pub withdrawals: ContiguousList<Withdrawal, MaxWithdrawalsPerPayload>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct ExecutionPayloadHeader {
    pub parent_hash: ExecutionBlockHash,
    pub fee_recipient: ExecutionAddress,
    pub state_root: H256,
    pub receipts_root: H256,
    pub logs_bloom: ByteVector<BytesPerLogsBloom>,
    pub prev_randao: H256,
    pub block_number: u64,
    pub gas_limit: Gas,
    pub gas_used: Gas,
    pub timestamp: u64,
    pub extra_data: ByteList<MaxExtraDataBytes>,
    pub base_fee_per_gas: Wei,
    pub block_hash: ExecutionBlockHash,
    pub transactions_root: H256,
    pub withdrawals_root: H256,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    pub signature: SignatureBytes,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Ssz)]
pub struct SignedBlindedBeaconBlock {
    pub message: BlindedBeaconBlock,
    pub signature: SignatureBytes,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Ssz)]
pub struct SignedBlsToExecutionChange {
    pub message: BlsToExecutionChange,
    pub signature: SignatureBytes,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Ssz)]
pub struct Withdrawal {
    pub index: WithdrawalIndex,
    pub validator_index: ValidatorIndex,
    pub address: ExecutionAddress,
    pub amount: Gwei,
}
