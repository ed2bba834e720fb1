use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_community(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, PlatformError> {
        match action {
            Action::CreateCommunity {
                name,
                contract_uri,
                creator_admin,
                default_admin,
                community_owner,
                nonce,
            } => {
                let community_id = self.create_community(
                    actor_id,
                    name,
                    contract_uri,
                    creator_admin,
                    default_admin,
                    community_owner,
                    nonce,
                )?;
                Ok(Value::String(community_id))
            }
            Action::PauseCommunity { community_id } => {
                self.pause_community(actor_id, &community_id)?;
                Ok(Value::Null)
            }
            Action::UnpauseCommunity { community_id } => {
                self.unpause_community(actor_id, &community_id)?;
                Ok(Value::Null)
            }
            Action::SwapDefaultAdmin {
                community_id,
                new_admin,
            } => {
                self.swap_default_admin(actor_id, &community_id, new_admin)?;
                Ok(Value::Null)
            }
            Action::SwapPlatform {
                community_id,
                new_account,
            } => {
                self.swap_platform(actor_id, &community_id, new_account)?;
                Ok(Value::Null)
            }
            Action::GrantCommunityAdmin {
                community_id,
                account,
            } => {
                self.grant_community_admin(actor_id, &community_id, account)?;
                Ok(Value::Null)
            }
            Action::RevokeCommunityAdmin {
                community_id,
                account,
            } => {
                self.revoke_community_admin(actor_id, &community_id, account)?;
                Ok(Value::Null)
            }
            Action::TransferCommunityOwnership {
                community_id,
                new_owner,
            } => {
                self.transfer_community_ownership(actor_id, &community_id, new_owner)?;
                Ok(Value::Null)
            }
            Action::SetContractMetadata {
                community_id,
                update_uri,
                update_name,
                uri,
                name,
            } => {
                self.set_contract_metadata(
                    actor_id,
                    &community_id,
                    update_uri,
                    update_name,
                    uri,
                    name,
                )?;
                Ok(Value::Null)
            }
            Action::SetReadManager {
                community_id,
                manager,
                manager_community,
            } => {
                self.set_read_manager(actor_id, &community_id, manager, manager_community)?;
                Ok(Value::Null)
            }
            Action::SetRoyaltyCut {
                community_id,
                cut_bps,
            } => {
                self.set_royalty_cut(actor_id, &community_id, cut_bps)?;
                Ok(Value::Null)
            }
            Action::SetRoyaltySplit {
                community_id,
                config,
            } => {
                let split_id = self.set_royalty_split(actor_id, &community_id, config)?;
                Ok(Value::String(split_id))
            }
            _ => unreachable!("dispatch_community called with non-community action"),
        }
    }
}
