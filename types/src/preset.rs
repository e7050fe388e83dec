//! List and vector bounds from the mainnet preset.
//!
//! See [presets in `consensus-specs`](https://github.com/ethereum/consensus-specs/tree/v1.4.0/presets/mainnet).
//! Minimal and custom presets are not supported. Every container in this crate uses these.

use typenum::{
    U1048576, U1073741824, U128, U131072, U16, U2, U2048, U256, U32, U4096, U512, U6,
};

// Phase 0
pub type MaxAttestations = U128;
pub type MaxAttesterSlashings = U2;
pub type MaxDeposits = U16;
pub type MaxProposerSlashings = U16;
pub type MaxValidatorsPerCommittee = U2048;
pub type MaxVoluntaryExits = U16;

// Altair
pub type SyncCommitteeSize = U512;

// Bellatrix
pub type BytesPerLogsBloom = U256;
pub type MaxBytesPerTransaction = U1073741824;
pub type MaxExtraDataBytes = U32;
pub type MaxTransactionsPerPayload = U1048576;

// Capella
pub type MaxBlsToExecutionChanges = U16;
pub type MaxWithdrawalsPerPayload = U16;

// Deneb
pub type BytesPerBlob = U131072;
pub type MaxBlobCommitmentsPerBlock = U4096;
pub type MaxBlobsPerBlock = U6;
