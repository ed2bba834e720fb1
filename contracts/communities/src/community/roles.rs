use crate::*;

impl Contract {
    pub(crate) fn pause_community(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_default_admin(actor_id)?;
        if community.paused {
            return Err(PlatformError::InvalidState(
                "Community already paused".into(),
            ));
        }
        community.paused = true;
        self.store_community(community_id, community);
        CommunityEvent::CommunityPaused {
            community_id: community_id.to_string(),
            actor: actor_id.clone(),
        }
        .emit();
        Ok(())
    }

    pub(crate) fn unpause_community(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_default_admin(actor_id)?;
        if !community.paused {
            return Err(PlatformError::InvalidState("Community is not paused".into()));
        }
        community.paused = false;
        self.store_community(community_id, community);
        CommunityEvent::CommunityUnpaused {
            community_id: community_id.to_string(),
            actor: actor_id.clone(),
        }
        .emit();
        Ok(())
    }

    /// Revoke-then-grant in one step so the community always has exactly one
    /// default admin.
    pub(crate) fn swap_default_admin(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        new_admin: AccountId,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_default_admin(actor_id)?;
        if community.default_admin == new_admin {
            return Err(PlatformError::AlreadySet(
                "Already the default admin".into(),
            ));
        }
        let old_admin = std::mem::replace(&mut community.default_admin, new_admin.clone());
        self.store_community(community_id, community);
        CommunityEvent::DefaultAdminSwapped {
            community_id: community_id.to_string(),
            old_admin,
            new_admin,
        }
        .emit();
        Ok(())
    }

    /// A platform role holder hands its own seat to another account.
    pub(crate) fn swap_platform(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        new_account: AccountId,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_platform_role(actor_id)?;
        check_not_paused(&community)?;
        if community.has_platform_role(&new_account) {
            return Err(PlatformError::AlreadySet(
                "Already holds the platform role".into(),
            ));
        }
        community.platform_admins.retain(|a| a != actor_id);
        community.platform_admins.push(new_account.clone());
        self.store_community(community_id, community);
        CommunityEvent::PlatformSwapped {
            community_id: community_id.to_string(),
            old_account: actor_id.clone(),
            new_account,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn grant_community_admin(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        account: AccountId,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_platform_role(actor_id)?;
        check_not_paused(&community)?;
        if community.has_community_admin_role(&account) {
            return Err(PlatformError::AlreadySet(
                "Already a community admin".into(),
            ));
        }
        community.community_admins.push(account.clone());
        self.store_community(community_id, community);
        CommunityEvent::CommunityAdminGranted {
            community_id: community_id.to_string(),
            account,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn revoke_community_admin(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        account: AccountId,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_platform_role(actor_id)?;
        check_not_paused(&community)?;
        if !community.has_community_admin_role(&account) {
            return Err(PlatformError::NotFound("Not a community admin".into()));
        }
        community.community_admins.retain(|a| a != &account);
        self.store_community(community_id, community);
        CommunityEvent::CommunityAdminRevoked {
            community_id: community_id.to_string(),
            account,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn transfer_community_ownership(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        new_owner: AccountId,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_community_owner(actor_id)?;
        check_not_paused(&community)?;
        if community.owner == new_owner {
            return Err(PlatformError::AlreadySet(
                "Already the community owner".into(),
            ));
        }
        let old_owner = std::mem::replace(&mut community.owner, new_owner.clone());
        self.store_community(community_id, community);
        CommunityEvent::CommunityOwnershipTransferred {
            community_id: community_id.to_string(),
            old_owner,
            new_owner,
        }
        .emit();
        Ok(())
    }
}
