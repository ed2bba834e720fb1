use near_sdk::json_types::U128;

use crate::splits::create;
use crate::*;

#[near]
impl Contract {
    pub fn get_split(&self, split_id: String) -> Option<Split> {
        self.splits.get(&split_id).cloned()
    }

    /// Must agree with the id `create_split_record` assigns for the same
    /// creator and configuration.
    pub fn predict_split_id(&self, creator: AccountId, config: SplitConfig) -> Option<String> {
        create::derive_split_id(&creator, &config).ok()
    }

    /// Pooled, not-yet-distributed balance a split holds for one asset.
    pub fn split_balance(&self, split_id: String, asset: Asset) -> U128 {
        U128(
            self.split_balances
                .get(&(split_id, asset))
                .copied()
                .unwrap_or(0),
        )
    }

    /// Distributed balance an account can withdraw for one asset.
    pub fn withdrawable_balance(&self, account_id: AccountId, asset: Asset) -> U128 {
        U128(
            self.withdrawable
                .get(&(account_id, asset))
                .copied()
                .unwrap_or(0),
        )
    }
}
