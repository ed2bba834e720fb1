use crate::community::ids;
use crate::*;

impl Contract {
    pub(crate) fn create_community(
        &mut self,
        actor_id: &AccountId,
        name: String,
        contract_uri: String,
        creator_admin: AccountId,
        default_admin: AccountId,
        community_owner: Option<AccountId>,
        nonce: u64,
    ) -> Result<String, PlatformError> {
        validation::validate_community_name(&name)?;
        validation::validate_uri(&contract_uri)?;

        let community_id = ids::derive_community_id(actor_id, &name, nonce)?;
        if self.communities.contains_key(&community_id) {
            return Err(PlatformError::AlreadySet(format!(
                "Community already exists: {}",
                community_id
            )));
        }

        // Platform role goes to the platform operator and the creator's nominee.
        let mut platform_admins = vec![self.platform_account.clone()];
        if !platform_admins.contains(&creator_admin) {
            platform_admins.push(creator_admin);
        }
        let owner = community_owner.unwrap_or_else(|| self.platform_account.clone());

        let community = Community {
            name: name.clone(),
            contract_uri,
            owner,
            default_admin,
            platform_admins,
            community_admins: Vec::new(),
            paused: false,
            royalty_cut_bps: 0,
            royalty_split_id: None,
            read_manager: None,
            // Defaults snapshot: later default-list changes leave this community alone.
            registered_managers: self.default_manager_ids.clone(),
            next_membership_seq: 0,
            next_benefit_seq: 0,
            created_at: env::block_timestamp(),
        };
        self.communities.insert(community_id.clone(), community);

        CommunityEvent::CommunityDeployed {
            community_id: community_id.clone(),
            name,
            creator: actor_id.clone(),
        }
        .emit();

        Ok(community_id)
    }

    pub(crate) fn load_community(&self, community_id: &str) -> Result<Community, PlatformError> {
        self.communities
            .get(community_id)
            .cloned()
            .ok_or_else(|| PlatformError::community_not_found(community_id))
    }

    pub(crate) fn store_community(&mut self, community_id: &str, community: Community) {
        self.communities.insert(community_id.to_string(), community);
    }
}
