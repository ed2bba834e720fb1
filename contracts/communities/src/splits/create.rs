use crate::*;

impl Contract {
    /// Registers a new split ledger. Shared by the standalone create action and
    /// by community royalty setup.
    pub(crate) fn create_split_record(
        &mut self,
        creator: &AccountId,
        config: SplitConfig,
    ) -> Result<String, PlatformError> {
        validation::validate_split_config(
            &config.accounts,
            &config.allocations,
            config.distributor_fee,
        )?;
        validate_controllers(&config)?;
        let split_id = derive_split_id(creator, &config)?;
        if self.splits.contains_key(&split_id) {
            return Err(PlatformError::AlreadySet(format!(
                "Split already exists: {split_id}"
            )));
        }
        let SplitConfig {
            accounts,
            allocations,
            distributor_fee,
            primary_controller,
            secondary_controllers,
        } = config;
        self.splits.insert(
            split_id.clone(),
            Split {
                accounts,
                allocations,
                distributor_fee,
                primary_controller,
                secondary_controllers,
                created_at: env::block_timestamp(),
            },
        );
        SplitEvent::SplitCreated {
            split_id: split_id.clone(),
            creator: creator.clone(),
        }
        .emit();
        Ok(split_id)
    }

    pub(crate) fn load_split(&self, split_id: &str) -> Result<Split, PlatformError> {
        self.splits
            .get(split_id)
            .cloned()
            .ok_or_else(|| PlatformError::split_not_found(split_id))
    }

    pub(crate) fn store_split(&mut self, split_id: &str, split: Split) {
        self.splits.insert(split_id.to_string(), split);
    }
}

/// Split ids are content addresses over the full configuration plus the
/// creator, so identical configs from different creators never collide.
pub(crate) fn derive_split_id(
    creator: &AccountId,
    config: &SplitConfig,
) -> Result<String, PlatformError> {
    let payload = (
        creator,
        &config.accounts,
        &config.allocations,
        config.distributor_fee,
        &config.primary_controller,
        &config.secondary_controllers,
    );
    let bytes = near_sdk::borsh::to_vec(&payload).map_err(|_| {
        PlatformError::InternalError("Failed to encode split id preimage".to_string())
    })?;
    Ok(hex::encode(env::sha256(&bytes)))
}

fn validate_controllers(config: &SplitConfig) -> Result<(), PlatformError> {
    for (i, controller) in config.secondary_controllers.iter().enumerate() {
        let duplicate = config.secondary_controllers[..i].contains(controller);
        if duplicate || config.primary_controller.as_ref() == Some(controller) {
            return Err(PlatformError::InvalidNewSecondaryController(
                controller.clone(),
            ));
        }
    }
    Ok(())
}
