use near_sdk::json_types::U128;

use crate::*;

impl Contract {
    /// Credits the whole attached deposit to the split's native balance.
    /// FT deposits arrive through `ft_on_transfer` instead.
    pub(crate) fn deposit_to_split(
        &mut self,
        actor_id: &AccountId,
        split_id: &str,
    ) -> Result<u128, PlatformError> {
        if !self.splits.contains_key(split_id) {
            return Err(PlatformError::split_not_found(split_id));
        }
        let amount = core::mem::take(&mut self.pending_attached_balance);
        if amount == 0 {
            return Err(PlatformError::InsufficientDeposit(
                "Deposit requires an attached amount".to_string(),
            ));
        }
        self.credit_split_balance(split_id, Asset::Native, amount)?;
        SplitEvent::SplitDeposit {
            split_id: split_id.to_string(),
            asset: Asset::Native,
            amount: U128(amount),
            depositor: actor_id.clone(),
        }
        .emit();
        Ok(amount)
    }

    pub(crate) fn credit_split_balance(
        &mut self,
        split_id: &str,
        asset: Asset,
        amount: u128,
    ) -> Result<(), PlatformError> {
        let key = (split_id.to_string(), asset);
        let current = self.split_balances.get(&key).copied().unwrap_or(0);
        let updated = current.checked_add(amount).ok_or_else(|| {
            PlatformError::InvalidInput("Split balance overflow".to_string())
        })?;
        self.split_balances.insert(key, updated);
        Ok(())
    }
}
