use near_sdk::json_types::U128;

use crate::*;

#[near]
impl Contract {
    /// NEP-141 deposit hook. The calling token contract is the asset and
    /// `msg` names the split to credit.
    /// Returns the unconsumed amount for NEP-141 refund semantics.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let token = env::predecessor_account_id();
        near_sdk::require!(
            self.whitelisted_currencies.contains(&token),
            "Currency not whitelisted"
        );
        near_sdk::require!(amount.0 > 0, "Amount must be positive");

        let split_id = msg.trim();
        if split_id.is_empty() || !self.splits.contains_key(split_id) {
            return PromiseOrValue::Value(amount);
        }
        let asset = Asset::Ft { token };
        if self
            .credit_split_balance(split_id, asset.clone(), amount.0)
            .is_err()
        {
            return PromiseOrValue::Value(amount);
        }
        SplitEvent::SplitDeposit {
            split_id: split_id.to_string(),
            asset,
            amount,
            depositor: sender_id,
        }
        .emit();
        PromiseOrValue::Value(U128(0))
    }
}
