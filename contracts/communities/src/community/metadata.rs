use crate::*;

impl Contract {
    pub(crate) fn set_contract_metadata(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        update_uri: bool,
        update_name: bool,
        uri: String,
        name: String,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        self.check_platform_class(&community, actor_id)?;
        check_not_paused(&community)?;
        if community.read_manager.is_none() {
            return Err(PlatformError::read_manager_not_set());
        }
        if !update_uri && !update_name {
            return Err(PlatformError::InvalidInput("One has to be set".into()));
        }
        if update_uri {
            validation::validate_uri(&uri)?;
            community.contract_uri = uri.clone();
        }
        if update_name {
            validation::validate_community_name(&name)?;
            community.name = name.clone();
        }
        self.store_community(community_id, community);
        CommunityEvent::ContractMetadataSet {
            community_id: community_id.to_string(),
            actor: actor_id.clone(),
            uri,
            name,
            set_uri: update_uri,
            set_name: update_name,
        }
        .emit();
        Ok(())
    }

    /// Read managers resolve URI and name queries off-contract. Assignment
    /// records the account and checks the back-reference it declares.
    pub(crate) fn set_read_manager(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        manager: AccountId,
        manager_community: Option<String>,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        self.check_platform_executor(actor_id)?;
        check_not_paused(&community)?;
        let declared =
            manager_community.ok_or_else(|| PlatformError::NotFound("Not a community manager".into()))?;
        if declared != community_id {
            return Err(PlatformError::InvalidInput(
                "Wrong community's manager".into(),
            ));
        }
        if community.read_manager.as_ref() == Some(&manager) {
            return Err(PlatformError::AlreadySet("Already set".into()));
        }
        community.read_manager = Some(manager.clone());
        self.store_community(community_id, community);
        CommunityEvent::ReadManagerSet {
            community_id: community_id.to_string(),
            manager,
            actor: actor_id.clone(),
        }
        .emit();
        Ok(())
    }

    pub(crate) fn set_token_uri(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        token_id: u64,
        uri: String,
    ) -> Result<(), PlatformError> {
        let community = self.load_community(community_id)?;
        self.check_platform_class(&community, actor_id)?;
        check_not_paused(&community)?;
        validation::validate_uri(&uri)?;
        let key = (community_id.to_string(), token_id);
        let mut record = self
            .tokens
            .get(&key)
            .cloned()
            .ok_or_else(|| PlatformError::token_not_found(token_id))?;
        record.uri = uri.clone();
        self.tokens.insert(key, record);
        CommunityEvent::TokenUriSet {
            community_id: community_id.to_string(),
            token_id,
            uri,
        }
        .emit();
        Ok(())
    }
}
