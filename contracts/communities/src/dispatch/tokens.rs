use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_tokens(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, PlatformError> {
        match action {
            Action::CreateTokenManager { kind, community_id } => {
                let manager_id = self.create_token_manager(actor_id, kind, community_id)?;
                Ok(Value::String(manager_id))
            }
            Action::RegisterTokenManager {
                community_id,
                manager_id,
            } => {
                self.register_token_manager(actor_id, &community_id, manager_id)?;
                Ok(Value::Null)
            }
            Action::UnregisterTokenManager {
                community_id,
                manager_id,
            } => {
                self.unregister_token_manager(actor_id, &community_id, manager_id)?;
                Ok(Value::Null)
            }
            Action::SetTokenManager {
                community_id,
                token_id,
                manager_id,
            } => {
                self.set_token_manager(actor_id, &community_id, token_id, manager_id)?;
                Ok(Value::Null)
            }
            Action::MintNewTokensToOne {
                community_id,
                manager_id,
                to,
                amounts,
                uris,
                is_membership,
            } => {
                let token_ids = self.mint_new_tokens_to_one(
                    actor_id,
                    &community_id,
                    &manager_id,
                    to,
                    amounts,
                    uris,
                    is_membership,
                )?;
                near_sdk::serde_json::to_value(token_ids).map_err(|_| {
                    PlatformError::InternalError("Failed to encode minted token ids".to_string())
                })
            }
            Action::MintNewTokenToMultiple {
                community_id,
                manager_id,
                recipients,
                amounts,
                uri,
                is_membership,
            } => {
                let token_id = self.mint_new_token_to_multiple(
                    actor_id,
                    &community_id,
                    &manager_id,
                    recipients,
                    amounts,
                    uri,
                    is_membership,
                )?;
                Ok(Value::from(token_id))
            }
            Action::SetTokenUri {
                community_id,
                token_id,
                uri,
            } => {
                self.set_token_uri(actor_id, &community_id, token_id, uri)?;
                Ok(Value::Null)
            }
            Action::TransferTokens {
                community_id,
                from,
                to,
                token_id,
                amount,
                data,
            } => {
                self.transfer_tokens(actor_id, &community_id, from, to, token_id, amount, data)?;
                Ok(Value::Null)
            }
            Action::BatchTransferTokens {
                community_id,
                from,
                to,
                token_ids,
                amounts,
                data,
            } => {
                self.batch_transfer_tokens(
                    actor_id,
                    &community_id,
                    from,
                    to,
                    token_ids,
                    amounts,
                    data,
                )?;
                Ok(Value::Null)
            }
            Action::BatchTransferToMany {
                community_id,
                from,
                recipients,
                token_ids,
                amounts,
                data,
            } => {
                self.batch_transfer_to_many(
                    actor_id,
                    &community_id,
                    from,
                    recipients,
                    token_ids,
                    amounts,
                    data,
                )?;
                Ok(Value::Null)
            }
            Action::SetApprovalForAll {
                community_id,
                operator,
                approved,
            } => {
                self.set_approval_for_all(actor_id, &community_id, operator, approved)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_tokens called with non-token action"),
        }
    }
}
