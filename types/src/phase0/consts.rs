use typenum::{Add1, U32};

pub type DepositContractTreeDepth = U32;

// Deposit proofs carry one extra node for the length of the deposit list.
pub type DepositProofLength = Add1<DepositContractTreeDepth>;
