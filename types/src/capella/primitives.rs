pub type WithdrawalIndex = u64;
