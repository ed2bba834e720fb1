use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_registry(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, PlatformError> {
        match action {
            Action::AddPlatformExecutor { executor } => {
                self.add_platform_executor(actor_id, executor)?;
                Ok(Value::Null)
            }
            Action::DeprecatePlatformExecutor { executor } => {
                self.deprecate_platform_executor(actor_id, executor)?;
                Ok(Value::Null)
            }
            Action::WhitelistCurrency { currency } => {
                self.whitelist_currency(actor_id, currency)?;
                Ok(Value::Null)
            }
            Action::UnwhitelistCurrency { currency } => {
                self.unwhitelist_currency(actor_id, currency)?;
                Ok(Value::Null)
            }
            Action::SetDefaultManagers { manager_ids } => {
                self.set_default_managers(actor_id, manager_ids)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_registry called with non-registry action"),
        }
    }
}
