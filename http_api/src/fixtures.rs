//! Blocks with non-default contents for every phase.

use bls::{PublicKeyBytes, SignatureBytes};
use hex_literal::hex;
use ssz::{BitList, BitVector, ByteList, ContiguousList, Uint256};
use types::{
    altair::containers::{
        BeaconBlock as AltairBeaconBlock, BeaconBlockBody as AltairBeaconBlockBody,
        SignedBeaconBlock as AltairSignedBeaconBlock, SyncAggregate,
    },
    bellatrix::containers::{
        BeaconBlock as BellatrixBeaconBlock, BeaconBlockBody as BellatrixBeaconBlockBody,
        BlindedBeaconBlock as BellatrixBlindedBeaconBlock,
        BlindedBeaconBlockBody as BellatrixBlindedBeaconBlockBody,
        ExecutionPayload as BellatrixExecutionPayload,
        ExecutionPayloadHeader as BellatrixExecutionPayloadHeader,
        SignedBeaconBlock as BellatrixSignedBeaconBlock,
        SignedBlindedBeaconBlock as BellatrixSignedBlindedBeaconBlock,
    },
    capella::containers::{
        BeaconBlock as CapellaBeaconBlock, BeaconBlockBody as CapellaBeaconBlockBody,
        BlindedBeaconBlock as CapellaBlindedBeaconBlock,
        BlindedBeaconBlockBody as CapellaBlindedBeaconBlockBody, BlsToExecutionChange,
        ExecutionPayload as CapellaExecutionPayload,
        ExecutionPayloadHeader as CapellaExecutionPayloadHeader,
        SignedBeaconBlock as CapellaSignedBeaconBlock,
        SignedBlindedBeaconBlock as CapellaSignedBlindedBeaconBlock, SignedBlsToExecutionChange,
        Withdrawal,
    },
    combined::{GenericBeaconBlock, GenericSignedBlock},
    deneb::{
        containers::{
            BeaconBlock as DenebBeaconBlock, BeaconBlockBody as DenebBeaconBlockBody,
            BlindedBeaconBlock as DenebBlindedBeaconBlock,
            BlindedBeaconBlockBody as DenebBlindedBeaconBlockBody, BlindedBlobSidecar,
            BlindedBlockContents, BlobSidecar, BlockContents,
            ExecutionPayload as DenebExecutionPayload,
            ExecutionPayloadHeader as DenebExecutionPayloadHeader,
            SignedBeaconBlock as DenebSignedBeaconBlock,
            SignedBlindedBeaconBlock as DenebSignedBlindedBeaconBlock,
            SignedBlindedBlobSidecar, SignedBlindedBlockContents, SignedBlobSidecar,
            SignedBlockContents,
        },
        primitives::KzgCommitment,
    },
    phase0::{
        containers::{
            Attestation, AttestationData, BeaconBlock as Phase0BeaconBlock,
            BeaconBlockBody as Phase0BeaconBlockBody, Checkpoint, Deposit, DepositData, Eth1Data,
            SignedBeaconBlock as Phase0SignedBeaconBlock, SignedVoluntaryExit, VoluntaryExit,
        },
        primitives::{Slot, H160, H256},
    },
};

pub const SLOT: Slot = 100;

const PARENT_ROOT: H256 = H256(hex!(
    "1111111111111111111111111111111111111111111111111111111111111111"
));

pub fn phase0_block() -> Phase0BeaconBlock {
    Phase0BeaconBlock {
        slot: SLOT,
        proposer_index: 7,
        parent_root: PARENT_ROOT,
        state_root: H256::repeat_byte(0x22),
        body: Phase0BeaconBlockBody {
            randao_reveal: signature(0x33),
            eth1_data: eth1_data(),
            graffiti: H256::repeat_byte(0x44),
            attestations: list(vec![attestation()]),
            deposits: list(vec![deposit()]),
            voluntary_exits: list(vec![voluntary_exit()]),
            ..Phase0BeaconBlockBody::default()
        },
    }
}

pub fn phase0_signed_block() -> Phase0SignedBeaconBlock {
    Phase0SignedBeaconBlock {
        message: phase0_block(),
        signature: signature(0x55),
    }
}

pub fn altair_signed_block() -> AltairSignedBeaconBlock {
    let Phase0BeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body,
    } = phase0_block();

    AltairSignedBeaconBlock {
        message: AltairBeaconBlock {
            slot,
            proposer_index,
            parent_root,
            state_root,
            body: AltairBeaconBlockBody {
                randao_reveal: body.randao_reveal,
                eth1_data: body.eth1_data,
                graffiti: body.graffiti,
                proposer_slashings: body.proposer_slashings,
                attester_slashings: body.attester_slashings,
                attestations: body.attestations,
                deposits: body.deposits,
                voluntary_exits: body.voluntary_exits,
                sync_aggregate: sync_aggregate(),
            },
        },
        signature: signature(0x55),
    }
}

pub fn bellatrix_block() -> BellatrixBeaconBlock {
    let AltairBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body,
    } = altair_signed_block().message;

    BellatrixBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body: BellatrixBeaconBlockBody {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload: BellatrixExecutionPayload {
                fee_recipient: H160::repeat_byte(0x66),
                block_number: 12_345,
                gas_limit: 30_000_000,
                gas_used: 21_000,
                timestamp: 1_700_000_000,
                extra_data: ByteList::try_from(b"grandine".to_vec())
                    .expect("extra data should fit"),
                base_fee_per_gas: Uint256::from_u64(7),
                block_hash: H256::repeat_byte(0x77),
                transactions: list(vec![
                    ByteList::try_from(hex!("02f8").to_vec()).expect("transaction should fit"),
                    ByteList::default(),
                ]),
                ..BellatrixExecutionPayload::default()
            },
        },
    }
}

pub fn bellatrix_signed_block() -> BellatrixSignedBeaconBlock {
    BellatrixSignedBeaconBlock {
        message: bellatrix_block(),
        signature: signature(0x55),
    }
}

pub fn bellatrix_blinded_block() -> BellatrixBlindedBeaconBlock {
    let BellatrixBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body,
    } = bellatrix_block();

    let payload = body.execution_payload;

    BellatrixBlindedBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body: BellatrixBlindedBeaconBlockBody {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload_header: BellatrixExecutionPayloadHeader {
                parent_hash: payload.parent_hash,
                fee_recipient: payload.fee_recipient,
                state_root: payload.state_root,
                receipts_root: payload.receipts_root,
                logs_bloom: payload.logs_bloom,
                prev_randao: payload.prev_randao,
                block_number: payload.block_number,
                gas_limit: payload.gas_limit,
                gas_used: payload.gas_used,
                timestamp: payload.timestamp,
                extra_data: payload.extra_data,
                base_fee_per_gas: payload.base_fee_per_gas,
                block_hash: payload.block_hash,
                transactions_root: H256::repeat_byte(0x88),
            },
        },
    }
}

pub fn bellatrix_signed_blinded_block() -> BellatrixSignedBlindedBeaconBlock {
    BellatrixSignedBlindedBeaconBlock {
        message: bellatrix_blinded_block(),
        signature: signature(0x55),
    }
}

pub fn capella_block() -> CapellaBeaconBlock {
    let BellatrixBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body,
    } = bellatrix_block();

    let payload = body.execution_payload;

    CapellaBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body: CapellaBeaconBlockBody {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload: CapellaExecutionPayload {
                parent_hash: payload.parent_hash,
                fee_recipient: payload.fee_recipient,
                state_root: payload.state_root,
                receipts_root: payload.receipts_root,
                logs_bloom: payload.logs_bloom,
                prev_randao: payload.prev_randao,
                block_number: payload.block_number,
                gas_limit: payload.gas_limit,
                gas_used: payload.gas_used,
                timestamp: payload.timestamp,
                extra_data: payload.extra_data,
                base_fee_per_gas: payload.base_fee_per_gas,
                block_hash: payload.block_hash,
                transactions: payload.transactions,
                withdrawals: list(vec![withdrawal()]),
            },
            bls_to_execution_changes: list(vec![bls_to_execution_change()]),
        },
    }
}

pub fn capella_signed_block() -> CapellaSignedBeaconBlock {
    CapellaSignedBeaconBlock {
        message: capella_block(),
        signature: signature(0x55),
    }
}

pub fn capella_signed_blinded_block() -> CapellaSignedBlindedBeaconBlock {
    let CapellaBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body,
    } = capella_block();

    let payload = body.execution_payload;

    let message = CapellaBlindedBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body: CapellaBlindedBeaconBlockBody {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload_header: CapellaExecutionPayloadHeader {
                parent_hash: payload.parent_hash,
                fee_recipient: payload.fee_recipient,
                state_root: payload.state_root,
                receipts_root: payload.receipts_root,
                logs_bloom: payload.logs_bloom,
                prev_randao: payload.prev_randao,
                block_number: payload.block_number,
                gas_limit: payload.gas_limit,
                gas_used: payload.gas_used,
                timestamp: payload.timestamp,
                extra_data: payload.extra_data,
                base_fee_per_gas: payload.base_fee_per_gas,
                block_hash: payload.block_hash,
                transactions_root: H256::repeat_byte(0x88),
                withdrawals_root: H256::repeat_byte(0x99),
            },
            bls_to_execution_changes: body.bls_to_execution_changes,
        },
    };

    CapellaSignedBlindedBeaconBlock {
        message,
        signature: signature(0x55),
    }
}

pub fn deneb_block() -> DenebBeaconBlock {
    let CapellaBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body,
    } = capella_block();

    let payload = body.execution_payload;

    DenebBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body: DenebBeaconBlockBody {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload: DenebExecutionPayload {
                parent_hash: payload.parent_hash,
                fee_recipient: payload.fee_recipient,
                state_root: payload.state_root,
                receipts_root: payload.receipts_root,
                logs_bloom: payload.logs_bloom,
                prev_randao: payload.prev_randao,
                block_number: payload.block_number,
                gas_limit: payload.gas_limit,
                gas_used: payload.gas_used,
                timestamp: payload.timestamp,
                extra_data: payload.extra_data,
                base_fee_per_gas: payload.base_fee_per_gas,
                block_hash: payload.block_hash,
                transactions: payload.transactions,
                withdrawals: payload.withdrawals,
                blob_gas_used: 131_072,
                excess_blob_gas: 262_144,
            },
            bls_to_execution_changes: body.bls_to_execution_changes,
            blob_kzg_commitments: list(vec![kzg_commitment()]),
        },
    }
}

pub fn deneb_block_contents() -> BlockContents {
    BlockContents {
        block: deneb_block(),
        blob_sidecars: list(vec![blob_sidecar()]),
    }
}

pub fn deneb_signed_block_contents() -> SignedBlockContents {
    SignedBlockContents {
        signed_block: DenebSignedBeaconBlock {
            message: deneb_block(),
            signature: signature(0x55),
        },
        signed_blob_sidecars: list(vec![SignedBlobSidecar {
            message: blob_sidecar(),
            signature: signature(0x56),
        }]),
    }
}

pub fn deneb_blinded_block() -> DenebBlindedBeaconBlock {
    let DenebBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body,
    } = deneb_block();

    let payload = body.execution_payload;

    DenebBlindedBeaconBlock {
        slot,
        proposer_index,
        parent_root,
        state_root,
        body: DenebBlindedBeaconBlockBody {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload_header: DenebExecutionPayloadHeader {
                parent_hash: payload.parent_hash,
                fee_recipient: payload.fee_recipient,
                state_root: payload.state_root,
                receipts_root: payload.receipts_root,
                logs_bloom: payload.logs_bloom,
                prev_randao: payload.prev_randao,
                block_number: payload.block_number,
                gas_limit: payload.gas_limit,
                gas_used: payload.gas_used,
                timestamp: payload.timestamp,
                extra_data: payload.extra_data,
                base_fee_per_gas: payload.base_fee_per_gas,
                block_hash: payload.block_hash,
                transactions_root: H256::repeat_byte(0x88),
                withdrawals_root: H256::repeat_byte(0x99),
                blob_gas_used: payload.blob_gas_used,
                excess_blob_gas: payload.excess_blob_gas,
            },
            bls_to_execution_changes: body.bls_to_execution_changes,
            blob_kzg_commitments: body.blob_kzg_commitments,
        },
    }
}

pub fn deneb_blinded_block_contents() -> BlindedBlockContents {
    BlindedBlockContents {
        blinded_block: deneb_blinded_block(),
        blinded_blob_sidecars: list(vec![blinded_blob_sidecar()]),
    }
}

pub fn deneb_signed_blinded_block_contents() -> SignedBlindedBlockContents {
    SignedBlindedBlockContents {
        signed_blinded_block: DenebSignedBlindedBeaconBlock {
            message: deneb_blinded_block(),
            signature: signature(0x55),
        },
        signed_blinded_blob_sidecars: list(vec![SignedBlindedBlobSidecar {
            message: blinded_blob_sidecar(),
            signature: signature(0x56),
        }]),
    }
}

pub fn signed_blocks() -> [GenericSignedBlock; 8] {
    [
        phase0_signed_block().into(),
        altair_signed_block().into(),
        bellatrix_signed_block().into(),
        bellatrix_signed_blinded_block().into(),
        capella_signed_block().into(),
        capella_signed_blinded_block().into(),
        deneb_signed_block_contents().into(),
        deneb_signed_blinded_block_contents().into(),
    ]
}

pub fn beacon_blocks() -> [GenericBeaconBlock; 8] {
    [
        phase0_block().into(),
        altair_signed_block().message.into(),
        bellatrix_block().into(),
        bellatrix_blinded_block().into(),
        capella_block().into(),
        capella_signed_blinded_block().message.into(),
        deneb_block_contents().into(),
        deneb_blinded_block_contents().into(),
    ]
}

pub fn signature(byte: u8) -> SignatureBytes {
    SignatureBytes::repeat_byte(byte)
}

fn list<T, N: typenum::Unsigned>(elements: Vec<T>) -> ContiguousList<T, N> {
    ContiguousList::try_from(elements).expect("list should be within bounds")
}

fn eth1_data() -> Eth1Data {
    Eth1Data {
        deposit_root: H256::repeat_byte(0xd0),
        deposit_count: 16_384,
        block_hash: H256::repeat_byte(0xd1),
    }
}

fn attestation() -> Attestation {
    let mut aggregation_bits = BitList::with_length(10);
    aggregation_bits.set(3, true);

    Attestation {
        aggregation_bits,
        data: AttestationData {
            slot: SLOT - 1,
            index: 2,
            beacon_block_root: PARENT_ROOT,
            source: Checkpoint {
                epoch: 1,
                root: H256::repeat_byte(0xa1),
            },
            target: Checkpoint {
                epoch: 3,
                root: H256::repeat_byte(0xa3),
            },
        },
        signature: signature(0xa5),
    }
}

fn deposit() -> Deposit {
    Deposit {
        data: DepositData {
            pubkey: PublicKeyBytes::repeat_byte(0xb0),
            withdrawal_credentials: H256::repeat_byte(0xb1),
            amount: 32_000_000_000,
            signature: signature(0xb2),
        },
        ..Deposit::default()
    }
}

fn voluntary_exit() -> SignedVoluntaryExit {
    SignedVoluntaryExit {
        message: VoluntaryExit {
            epoch: 2,
            validator_index: 9,
        },
        signature: signature(0xc0),
    }
}

fn sync_aggregate() -> SyncAggregate {
    let mut sync_committee_bits = BitVector::default();
    sync_committee_bits.set(0, true);
    sync_committee_bits.set(511, true);

    SyncAggregate {
        sync_committee_bits,
        sync_committee_signature: signature(0xe0),
    }
}

fn withdrawal() -> Withdrawal {
    Withdrawal {
        index: 5,
        validator_index: 9,
        address: H160::repeat_byte(0xf0),
        amount: 1_000,
    }
}

fn bls_to_execution_change() -> SignedBlsToExecutionChange {
    SignedBlsToExecutionChange {
        message: BlsToExecutionChange {
            validator_index: 9,
            from_bls_pubkey: PublicKeyBytes::repeat_byte(0xf1),
            to_execution_address: H160::repeat_byte(0xf2),
        },
        signature: signature(0xf3),
    }
}

fn kzg_commitment() -> KzgCommitment {
    KzgCommitment::repeat_byte(0xc5)
}

fn blob_sidecar() -> BlobSidecar {
    BlobSidecar {
        block_root: H256::repeat_byte(0xbb),
        index: 0,
        slot: SLOT,
        block_parent_root: PARENT_ROOT,
        proposer_index: 7,
        kzg_commitment: kzg_commitment(),
        kzg_proof: KzgCommitment::repeat_byte(0xc6),
        ..BlobSidecar::default()
    }
}

fn blinded_blob_sidecar() -> BlindedBlobSidecar {
    BlindedBlobSidecar {
        block_root: H256::repeat_byte(0xbb),
        index: 0,
        slot: SLOT,
        block_parent_root: PARENT_ROOT,
        proposer_index: 7,
        blob_root: H256::repeat_byte(0xbc),
        kzg_commitment: kzg_commitment(),
        kzg_proof: KzgCommitment::repeat_byte(0xc6),
    }
}
