use crate::*;

impl Contract {
    pub(crate) fn grant_primary_controller(
        &mut self,
        actor_id: &AccountId,
        split_id: &str,
        new_controller: AccountId,
    ) -> Result<(), PlatformError> {
        let mut split = self.load_split(split_id)?;
        split.check_primary_controller(actor_id)?;
        if split.is_primary_controller(&new_controller) {
            return Err(PlatformError::AlreadySet(format!(
                "{new_controller} is already the primary controller"
            )));
        }
        let old_controller = split.primary_controller.replace(new_controller.clone());
        self.store_split(split_id, split);
        SplitEvent::PrimaryControllerChanged {
            split_id: split_id.to_string(),
            old_controller,
            new_controller: Some(new_controller),
        }
        .emit();
        Ok(())
    }

    /// Leaves the split with no primary controller. Irreversible: nobody can
    /// grant the role back afterwards.
    pub(crate) fn renounce_primary_controller(
        &mut self,
        actor_id: &AccountId,
        split_id: &str,
    ) -> Result<(), PlatformError> {
        let mut split = self.load_split(split_id)?;
        split.check_primary_controller(actor_id)?;
        let old_controller = split.primary_controller.take();
        self.store_split(split_id, split);
        SplitEvent::PrimaryControllerChanged {
            split_id: split_id.to_string(),
            old_controller,
            new_controller: None,
        }
        .emit();
        Ok(())
    }

    /// Secondary membership is self-governing: any current secondary may add
    /// another. The primary controller holds no say here.
    pub(crate) fn grant_secondary_controller(
        &mut self,
        actor_id: &AccountId,
        split_id: &str,
        controller: AccountId,
    ) -> Result<(), PlatformError> {
        let mut split = self.load_split(split_id)?;
        split.check_secondary_controller(actor_id)?;
        if split.is_primary_controller(&controller) || split.is_secondary_controller(&controller) {
            return Err(PlatformError::InvalidNewSecondaryController(controller));
        }
        split.secondary_controllers.push(controller.clone());
        self.store_split(split_id, split);
        SplitEvent::SecondaryControllerGranted {
            split_id: split_id.to_string(),
            controller,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn revoke_secondary_controller(
        &mut self,
        actor_id: &AccountId,
        split_id: &str,
        controller: AccountId,
    ) -> Result<(), PlatformError> {
        let mut split = self.load_split(split_id)?;
        split.check_secondary_controller(actor_id)?;
        if !split.is_secondary_controller(&controller) {
            return Err(PlatformError::InvalidRemovedSecondaryController(controller));
        }
        split.secondary_controllers.retain(|c| c != &controller);
        self.store_split(split_id, split);
        SplitEvent::SecondaryControllerRevoked {
            split_id: split_id.to_string(),
            controller,
        }
        .emit();
        Ok(())
    }
}
