use crate::*;

impl Contract {
    pub(crate) fn set_royalty_cut(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        cut_bps: u16,
    ) -> Result<(), PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_default_admin(actor_id)?;
        if cut_bps > BASIS_POINTS {
            return Err(PlatformError::CutTooBig(cut_bps));
        }
        let old_cut_bps = std::mem::replace(&mut community.royalty_cut_bps, cut_bps);
        self.store_community(community_id, community);
        CommunityEvent::RoyaltyCutSet {
            community_id: community_id.to_string(),
            old_cut_bps,
            new_cut_bps: cut_bps,
        }
        .emit();
        Ok(())
    }

    /// Creates the community's royalty split. One-shot: a community keeps its
    /// first split forever, later reconfiguration goes through the split's own
    /// controllers.
    pub(crate) fn set_royalty_split(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        config: SplitConfig,
    ) -> Result<String, PlatformError> {
        let mut community = self.load_community(community_id)?;
        community.check_default_admin(actor_id)?;
        if community.royalty_split_id.is_some() {
            return Err(PlatformError::AlreadySet("Already set".into()));
        }
        let split_id = self.create_split_record(actor_id, config)?;
        community.royalty_split_id = Some(split_id.clone());
        self.store_community(community_id, community);
        CommunityEvent::RoyaltySplitSet {
            community_id: community_id.to_string(),
            split_id: split_id.clone(),
        }
        .emit();
        Ok(split_id)
    }
}
