use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), PlatformError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(PlatformError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_not_paused(community: &Community) -> Result<(), PlatformError> {
    if community.paused {
        return Err(PlatformError::Paused);
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), PlatformError> {
        if actor_id != &self.owner_id {
            return Err(PlatformError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_platform_executor(&self, actor_id: &AccountId) -> Result<(), PlatformError> {
        if !self.platform_executors.contains(actor_id) {
            return Err(PlatformError::only_owner("a platform executor"));
        }
        Ok(())
    }

    /// Platform-class callers hold the community's platform role or sit in the
    /// registry's executor set.
    pub(crate) fn is_platform_class(&self, community: &Community, actor_id: &AccountId) -> bool {
        community.platform_admins.contains(actor_id) || self.platform_executors.contains(actor_id)
    }

    pub(crate) fn check_platform_class(
        &self,
        community: &Community,
        actor_id: &AccountId,
    ) -> Result<(), PlatformError> {
        if !self.is_platform_class(community, actor_id) {
            return Err(PlatformError::only_owner(
                "a platform role holder or platform executor",
            ));
        }
        Ok(())
    }
}
