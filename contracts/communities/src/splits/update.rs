use crate::*;

impl Contract {
    /// The primary controller may replace the whole configuration. Secondary
    /// controllers may retune allocations and the fee but never touch the
    /// recipient set. Controller membership is not updatable here at all.
    pub(crate) fn update_split(
        &mut self,
        actor_id: &AccountId,
        split_id: &str,
        accounts: Vec<AccountId>,
        allocations: Vec<u32>,
        distributor_fee: u32,
    ) -> Result<(), PlatformError> {
        let mut split = self.load_split(split_id)?;
        if split.is_primary_controller(actor_id) {
            validation::validate_split_config(&accounts, &allocations, distributor_fee)?;
            split.accounts = accounts;
            split.allocations = allocations;
            split.distributor_fee = distributor_fee;
        } else if split.is_secondary_controller(actor_id) {
            if accounts != split.accounts {
                return Err(PlatformError::Unauthorized(format!(
                    "{actor_id} may not change split accounts"
                )));
            }
            validation::validate_split_config(&accounts, &allocations, distributor_fee)?;
            split.allocations = allocations;
            split.distributor_fee = distributor_fee;
        } else {
            return Err(PlatformError::Unauthorized(format!(
                "{actor_id} is not a split controller"
            )));
        }
        self.store_split(split_id, split);
        SplitEvent::SplitUpdated {
            split_id: split_id.to_string(),
            actor: actor_id.clone(),
        }
        .emit();
        Ok(())
    }
}
