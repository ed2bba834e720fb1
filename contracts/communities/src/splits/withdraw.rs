use near_sdk::json_types::U128;
use near_sdk::{Gas, NearToken, Promise};

use crate::external::ext_ft;
use crate::*;

impl Contract {
    /// Pays out distributed funds. Permissionless: anyone may push another
    /// account's withdrawable rows out to that account.
    /// Rows are zeroed before any transfer fires.
    pub(crate) fn withdraw(
        &mut self,
        account: AccountId,
        withdraw_native: bool,
        ft_assets: Vec<AccountId>,
    ) -> Result<(), PlatformError> {
        let mut paid_any = false;

        if withdraw_native {
            let key = (account.clone(), Asset::Native);
            let amount = self.withdrawable.get(&key).copied().unwrap_or(0);
            if amount > 0 {
                self.withdrawable.remove(&key);
                Promise::new(account.clone()).transfer(NearToken::from_yoctonear(amount));
                SplitEvent::SplitWithdrawal {
                    account: account.clone(),
                    asset: Asset::Native,
                    amount: U128(amount),
                }
                .emit();
                paid_any = true;
            }
        }

        for token in ft_assets {
            let asset = Asset::Ft {
                token: token.clone(),
            };
            let key = (account.clone(), asset.clone());
            let amount = self.withdrawable.get(&key).copied().unwrap_or(0);
            if amount == 0 {
                continue;
            }
            self.withdrawable.remove(&key);
            ext_ft::ext(token)
                .with_static_gas(Gas::from_tgas(GAS_FT_TRANSFER_TGAS))
                .with_attached_deposit(ONE_YOCTO)
                .ft_transfer(account.clone(), U128(amount), None);
            SplitEvent::SplitWithdrawal {
                account: account.clone(),
                asset,
                amount: U128(amount),
            }
            .emit();
            paid_any = true;
        }

        if !paid_any {
            return Err(PlatformError::InsufficientBalance(
                "Nothing to withdraw".to_string(),
            ));
        }
        Ok(())
    }
}
