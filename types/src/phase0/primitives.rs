pub use ethereum_types::{H160, H256};

pub type CommitteeIndex = u64;
pub type DepositIndex = u64;
pub type Epoch = u64;
pub type ExecutionAddress = H160;
pub type ExecutionBlockHash = H256;
pub type Gwei = u64;
pub type Slot = u64;
pub type ValidatorIndex = u64;
