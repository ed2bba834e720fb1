use near_sdk::json_types::U128;
use primitive_types::U256;

use crate::*;

/// Floor of `amount * numerator / denominator`, widened so the intermediate
/// product cannot overflow. Callers keep `numerator <= denominator`, which
/// bounds the result by `amount`.
pub fn proportional(amount: u128, numerator: u128, denominator: u128) -> u128 {
    (U256::from(amount) * U256::from(numerator) / U256::from(denominator)).as_u128()
}

impl Contract {
    /// Moves a split's pooled balance for one asset into per-account
    /// withdrawable rows. Permissionless: anyone may trigger it and the
    /// distributor fee goes to `distributor` (the actor unless overridden).
    /// Shares round down, so a few units may stay pooled for the next round.
    pub(crate) fn distribute(
        &mut self,
        actor_id: &AccountId,
        split_id: &str,
        asset: Asset,
        distributor: Option<AccountId>,
    ) -> Result<(), PlatformError> {
        let split = self.load_split(split_id)?;
        let key = (split_id.to_string(), asset.clone());
        let balance = self.split_balances.get(&key).copied().unwrap_or(0);
        if balance == 0 {
            return Err(PlatformError::InsufficientBalance(
                "Nothing to distribute".to_string(),
            ));
        }

        let distributor = distributor.unwrap_or_else(|| actor_id.clone());
        let fee_amount = proportional(
            balance,
            u128::from(split.distributor_fee),
            u128::from(TOTAL_ALLOCATION),
        );
        if fee_amount > 0 {
            self.credit_withdrawable(&distributor, &asset, fee_amount)?;
        }

        let remaining = balance - fee_amount;
        let mut paid_out = fee_amount;
        for (account, allocation) in split.accounts.iter().zip(split.allocations.iter()) {
            let share = proportional(remaining, u128::from(*allocation), u128::from(TOTAL_ALLOCATION));
            if share > 0 {
                self.credit_withdrawable(account, &asset, share)?;
            }
            paid_out += share;
        }

        // paid_out never exceeds balance, so the residue subtraction is exact.
        let residue = balance - paid_out;
        if residue == 0 {
            self.split_balances.remove(&key);
        } else {
            self.split_balances.insert(key, residue);
        }

        SplitEvent::SplitDistributed {
            split_id: split_id.to_string(),
            asset,
            amount: U128(balance),
            fee: U128(fee_amount),
            distributor,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn credit_withdrawable(
        &mut self,
        account_id: &AccountId,
        asset: &Asset,
        amount: u128,
    ) -> Result<(), PlatformError> {
        let key = (account_id.clone(), asset.clone());
        let current = self.withdrawable.get(&key).copied().unwrap_or(0);
        let updated = current.checked_add(amount).ok_or_else(|| {
            PlatformError::InvalidInput("Withdrawable balance overflow".to_string())
        })?;
        self.withdrawable.insert(key, updated);
        Ok(())
    }
}
