use crate::*;
use near_sdk::serde_json::Value;

#[near]
impl Contract {
    /// Single mutating entrypoint. Every state-changing operation arrives as
    /// an `Action` inside a `Request`, so actor resolution, confirmation and
    /// deposit accounting live in one place.
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, request: Request) -> Result<Value, PlatformError> {
        let Request {
            target_account,
            action,
            options,
        } = request;

        let options = options.unwrap_or_default();
        let caller = env::predecessor_account_id();

        // Relay rule: acting for another account is an executor privilege.
        let actor_id = match target_account {
            Some(target) if target != caller => {
                self.check_platform_executor(&caller)?;
                target
            }
            _ => caller.clone(),
        };
        let relayed = actor_id != caller;

        // Security boundary: direct state-changing calls must carry a deposit
        // to force the wallet signature path.
        if !relayed && action.requires_confirmation() {
            let deposit = env::attached_deposit().as_yoctonear();
            if deposit == 0 {
                return Err(PlatformError::InsufficientDeposit(
                    "Direct calls require a 1 yoctoNEAR confirmation deposit for this action"
                        .into(),
                ));
            }
        }

        if self.in_progress {
            return Err(PlatformError::InvalidState(
                "Nested execute is not allowed".to_string(),
            ));
        }
        self.in_progress = true;
        self.pending_attached_balance = env::attached_deposit().as_yoctonear();

        let result = self.dispatch_action(action, &actor_id);

        self.in_progress = false;
        let remaining = core::mem::take(&mut self.pending_attached_balance);
        if remaining > 0 && options.refund_unused_deposit {
            Promise::new(caller).transfer(NearToken::from_yoctonear(remaining));
        }

        result
    }
}
