use near_sdk::json_types::U128;

use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_splits(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, PlatformError> {
        match action {
            Action::CreateSplit { config } => {
                let split_id = self.create_split_record(actor_id, config)?;
                Ok(Value::String(split_id))
            }
            Action::UpdateSplit {
                split_id,
                accounts,
                allocations,
                distributor_fee,
            } => {
                self.update_split(actor_id, &split_id, accounts, allocations, distributor_fee)?;
                Ok(Value::Null)
            }
            Action::GrantPrimaryController {
                split_id,
                new_controller,
            } => {
                self.grant_primary_controller(actor_id, &split_id, new_controller)?;
                Ok(Value::Null)
            }
            Action::RenouncePrimaryController { split_id } => {
                self.renounce_primary_controller(actor_id, &split_id)?;
                Ok(Value::Null)
            }
            Action::GrantSecondaryController {
                split_id,
                controller,
            } => {
                self.grant_secondary_controller(actor_id, &split_id, controller)?;
                Ok(Value::Null)
            }
            Action::RevokeSecondaryController {
                split_id,
                controller,
            } => {
                self.revoke_secondary_controller(actor_id, &split_id, controller)?;
                Ok(Value::Null)
            }
            Action::DepositToSplit { split_id } => {
                let amount = self.deposit_to_split(actor_id, &split_id)?;
                near_sdk::serde_json::to_value(U128(amount)).map_err(|_| {
                    PlatformError::InternalError("Failed to encode deposit amount".to_string())
                })
            }
            Action::Distribute {
                split_id,
                asset,
                distributor,
            } => {
                self.distribute(actor_id, &split_id, asset, distributor)?;
                Ok(Value::Null)
            }
            Action::Withdraw {
                account,
                withdraw_native,
                ft_assets,
            } => {
                self.withdraw(account, withdraw_native, ft_assets)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_splits called with non-split action"),
        }
    }
}
