use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Communities,
    Balances,
    Tokens,
    OperatorApprovals,
    Managers,
    Splits,
    SplitBalances,
    Withdrawable,
}
