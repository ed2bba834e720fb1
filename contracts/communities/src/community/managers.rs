use crate::*;

impl Contract {
    /// Replaces the list of managers every future community starts with.
    /// Existing communities keep their snapshot.
    pub(crate) fn set_default_managers(
        &mut self,
        actor_id: &AccountId,
        manager_ids: Vec<String>,
    ) -> Result<(), PlatformError> {
        self.check_contract_owner(actor_id)?;
        for (i, manager_id) in manager_ids.iter().enumerate() {
            let manager = self
                .managers
                .get(manager_id)
                .ok_or_else(|| PlatformError::manager_not_found(manager_id))?;
            if manager.community_id.is_some() {
                return Err(PlatformError::InvalidInput(format!(
                    "Default manager {} must be shared, not bound",
                    manager_id
                )));
            }
            if manager_ids[..i].contains(manager_id) {
                return Err(PlatformError::InvalidInput(format!(
                    "Duplicate default manager: {}",
                    manager_id
                )));
            }
        }
        self.default_manager_ids = manager_ids.clone();
        RegistryEvent::DefaultManagersSet { manager_ids }.emit();
        Ok(())
    }

    pub(crate) fn create_token_manager(
        &mut self,
        actor_id: &AccountId,
        kind: ManagerKind,
        community_id: Option<String>,
    ) -> Result<String, PlatformError> {
        match &community_id {
            Some(id) => {
                // Hooked managers are per-community by construction; shared
                // ones may serve any ledger.
                let community = self.load_community(id)?;
                self.check_platform_class(&community, actor_id)?;
            }
            None => {
                if kind == ManagerKind::TransferHook {
                    return Err(PlatformError::InvalidInput(
                        "Transfer hook managers must be bound to a community".into(),
                    ));
                }
                if !self.platform_executors.contains(actor_id) {
                    self.check_contract_owner(actor_id)?;
                }
            }
        }

        let manager_id = format!("tm:{}", self.next_manager_seq);
        self.next_manager_seq += 1;
        let manager = TokenManager {
            kind: kind.clone(),
            community_id: community_id.clone(),
            created_at: env::block_timestamp(),
        };
        self.managers.insert(manager_id.clone(), manager);

        CommunityEvent::TokenManagerDeployed {
            manager_id: manager_id.clone(),
            kind: kind.as_str().to_string(),
            community_id,
        }
        .emit();

        Ok(manager_id)
    }

    pub(crate) fn register_token_manager(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        manager_id: String,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        // Custody/policy separation: the default admin is deliberately barred
        // from manager registration.
        self.check_platform_class(&community, actor_id)?;
        check_not_paused(&community)?;
        let manager = self
            .managers
            .get(&manager_id)
            .ok_or_else(|| PlatformError::manager_not_found(&manager_id))?;
        if !manager.usable_with(community_id) {
            return Err(PlatformError::InvalidInput(
                "Manager is bound to another community".into(),
            ));
        }
        if community.registered_managers.contains(&manager_id) {
            return Err(PlatformError::AlreadySet(
                "Token manager already registered".into(),
            ));
        }
        community.registered_managers.push(manager_id.clone());
        self.store_community(community_id, community);
        CommunityEvent::TokenManagerRegistered {
            community_id: community_id.to_string(),
            manager_id,
        }
        .emit();
        Ok(())
    }

    /// Unregistering only blocks future mints. Existing token records keep
    /// their manager pointer and stay queryable.
    pub(crate) fn unregister_token_manager(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        manager_id: String,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        self.check_platform_class(&community, actor_id)?;
        check_not_paused(&community)?;
        if !community.registered_managers.contains(&manager_id) {
            return Err(PlatformError::NotFound(
                "Token manager not registered".into(),
            ));
        }
        community.registered_managers.retain(|m| m != &manager_id);
        self.store_community(community_id, community);
        CommunityEvent::TokenManagerUnregistered {
            community_id: community_id.to_string(),
            manager_id,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn set_token_manager(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        token_id: u64,
        manager_id: String,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        self.check_platform_executor(actor_id)?;
        check_not_paused(&community)?;

        let token_key = (community_id.to_string(), token_id);
        let mut token = self
            .tokens
            .get(&token_key)
            .cloned()
            .ok_or(PlatformError::NoExistingManager(token_id))?;

        let manager = self
            .managers
            .get(&manager_id)
            .ok_or_else(|| PlatformError::manager_not_found(&manager_id))?;
        if !manager.usable_with(community_id) {
            return Err(PlatformError::InvalidInput(
                "Manager is bound to another community".into(),
            ));
        }

        // Assignment implies registration.
        if !community.registered_managers.contains(&manager_id) {
            community.registered_managers.push(manager_id.clone());
            self.store_community(community_id, community);
            CommunityEvent::TokenManagerRegistered {
                community_id: community_id.to_string(),
                manager_id: manager_id.clone(),
            }
            .emit();
        }

        let old_manager_id = std::mem::replace(&mut token.manager_id, manager_id.clone());
        self.tokens.insert(token_key, token);
        CommunityEvent::TokenManagerSet {
            community_id: community_id.to_string(),
            token_id,
            old_manager_id,
            new_manager_id: manager_id,
        }
        .emit();
        Ok(())
    }
}
