mod community;
mod registry;
mod splits;
mod tokens;

use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(crate) fn dispatch_action(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, PlatformError> {
        match &action {
            Action::AddPlatformExecutor { .. }
            | Action::DeprecatePlatformExecutor { .. }
            | Action::WhitelistCurrency { .. }
            | Action::UnwhitelistCurrency { .. }
            | Action::SetDefaultManagers { .. } => self.dispatch_registry(action, actor_id),

            Action::CreateCommunity { .. }
            | Action::PauseCommunity { .. }
            | Action::UnpauseCommunity { .. }
            | Action::SwapDefaultAdmin { .. }
            | Action::SwapPlatform { .. }
            | Action::GrantCommunityAdmin { .. }
            | Action::RevokeCommunityAdmin { .. }
            | Action::TransferCommunityOwnership { .. }
            | Action::SetContractMetadata { .. }
            | Action::SetReadManager { .. }
            | Action::SetRoyaltyCut { .. }
            | Action::SetRoyaltySplit { .. } => self.dispatch_community(action, actor_id),

            Action::CreateTokenManager { .. }
            | Action::RegisterTokenManager { .. }
            | Action::UnregisterTokenManager { .. }
            | Action::SetTokenManager { .. }
            | Action::MintNewTokensToOne { .. }
            | Action::MintNewTokenToMultiple { .. }
            | Action::SetTokenUri { .. }
            | Action::TransferTokens { .. }
            | Action::BatchTransferTokens { .. }
            | Action::BatchTransferToMany { .. }
            | Action::SetApprovalForAll { .. } => self.dispatch_tokens(action, actor_id),

            Action::CreateSplit { .. }
            | Action::UpdateSplit { .. }
            | Action::GrantPrimaryController { .. }
            | Action::RenouncePrimaryController { .. }
            | Action::GrantSecondaryController { .. }
            | Action::RevokeSecondaryController { .. }
            | Action::DepositToSplit { .. }
            | Action::Distribute { .. }
            | Action::Withdraw { .. } => self.dispatch_splits(action, actor_id),
        }
    }
}
