use crate::*;
use near_sdk::json_types::U128;

impl Contract {
    /// Mints a batch of brand-new token ids to a single recipient. One id is
    /// allocated per entry, banded by its membership flag.
    pub(crate) fn mint_new_tokens_to_one(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        manager_id: &str,
        to: AccountId,
        amounts: Vec<U128>,
        uris: Vec<String>,
        is_membership: Vec<bool>,
    ) -> Result<Vec<u64>, PlatformError> {
        let mut community = self.load_community(community_id)?;
        self.check_mint_access(&community, manager_id, actor_id)?;

        if amounts.is_empty() {
            return Err(PlatformError::EmptyArray("amounts cannot be empty".into()));
        }
        if is_membership.is_empty() {
            return Err(PlatformError::EmptyArray(
                "is_membership cannot be empty".into(),
            ));
        }
        if amounts.len() != is_membership.len() {
            return Err(PlatformError::InvalidInput(
                "amounts and is_membership length mismatch".into(),
            ));
        }
        // URIs are optional as a whole, never partially.
        if !uris.is_empty() && uris.len() != amounts.len() {
            return Err(PlatformError::InvalidInput(
                "uris length must match amounts".into(),
            ));
        }
        if amounts.len() > MAX_BATCH_MINT {
            return Err(PlatformError::InvalidInput(format!(
                "Maximum {} mints per call",
                MAX_BATCH_MINT
            )));
        }
        for uri in &uris {
            validation::validate_uri(uri)?;
        }

        let mut token_ids = Vec::with_capacity(amounts.len());
        for (i, amount) in amounts.iter().enumerate() {
            let token_id = community.allocate_token_id(is_membership[i]);
            let uri = uris.get(i).cloned().unwrap_or_default();
            self.tokens.insert(
                (community_id.to_string(), token_id),
                TokenRecord {
                    manager_id: manager_id.to_string(),
                    uri,
                    total_supply: amount.0,
                },
            );
            self.credit_balance(community_id, token_id, &to, amount.0)?;
            CommunityEvent::TransferSingle {
                community_id: community_id.to_string(),
                operator: actor_id.clone(),
                from: None,
                to: to.clone(),
                token_id,
                amount: *amount,
            }
            .emit();
            token_ids.push(token_id);
        }
        self.store_community(community_id, community);

        CommunityEvent::MintedNewTokens {
            community_id: community_id.to_string(),
            manager_id: manager_id.to_string(),
            token_ids: token_ids.clone(),
            actor: actor_id.clone(),
        }
        .emit();

        Ok(token_ids)
    }

    /// Mints one brand-new token id and credits every recipient. `amounts`
    /// either broadcasts a single value or matches `recipients` pairwise.
    pub(crate) fn mint_new_token_to_multiple(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        manager_id: &str,
        recipients: Vec<AccountId>,
        amounts: Vec<U128>,
        uri: String,
        is_membership: bool,
    ) -> Result<u64, PlatformError> {
        let mut community = self.load_community(community_id)?;
        self.check_mint_access(&community, manager_id, actor_id)?;

        if recipients.is_empty() {
            return Err(PlatformError::EmptyArray(
                "recipients cannot be empty".into(),
            ));
        }
        if amounts.is_empty() {
            return Err(PlatformError::EmptyArray("amounts cannot be empty".into()));
        }
        if amounts.len() != 1 && amounts.len() != recipients.len() {
            return Err(PlatformError::InvalidInput(
                "amounts length must be 1 or match recipients".into(),
            ));
        }
        if recipients.len() > MAX_BATCH_MINT {
            return Err(PlatformError::InvalidInput(format!(
                "Maximum {} recipients per call",
                MAX_BATCH_MINT
            )));
        }
        validation::validate_uri(&uri)?;

        let mut total_supply: u128 = 0;
        for (i, _) in recipients.iter().enumerate() {
            let amount = if amounts.len() == 1 {
                amounts[0].0
            } else {
                amounts[i].0
            };
            total_supply = total_supply
                .checked_add(amount)
                .ok_or_else(|| PlatformError::InvalidInput("Total supply overflow".into()))?;
        }

        let token_id = community.allocate_token_id(is_membership);
        self.tokens.insert(
            (community_id.to_string(), token_id),
            TokenRecord {
                manager_id: manager_id.to_string(),
                uri,
                total_supply,
            },
        );
        for (i, recipient) in recipients.iter().enumerate() {
            let amount = if amounts.len() == 1 {
                amounts[0].0
            } else {
                amounts[i].0
            };
            self.credit_balance(community_id, token_id, recipient, amount)?;
            CommunityEvent::TransferSingle {
                community_id: community_id.to_string(),
                operator: actor_id.clone(),
                from: None,
                to: recipient.clone(),
                token_id,
                amount: U128(amount),
            }
            .emit();
        }
        self.store_community(community_id, community);

        CommunityEvent::MintedNewTokens {
            community_id: community_id.to_string(),
            manager_id: manager_id.to_string(),
            token_ids: vec![token_id],
            actor: actor_id.clone(),
        }
        .emit();

        Ok(token_id)
    }

    /// Mint gate: the manager must be currently registered and the actor must
    /// re-derive platform privileges, independent of who invoked the manager.
    fn check_mint_access(
        &self,
        community: &Community,
        manager_id: &str,
        actor_id: &AccountId,
    ) -> Result<(), PlatformError> {
        check_not_paused(community)?;
        if !community
            .registered_managers
            .iter()
            .any(|m| m == manager_id)
        {
            return Err(PlatformError::UnregisteredManager(manager_id.to_string()));
        }
        self.check_platform_class(community, actor_id)
    }

    pub(crate) fn credit_balance(
        &mut self,
        community_id: &str,
        token_id: u64,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<(), PlatformError> {
        let key = (community_id.to_string(), token_id, account_id.clone());
        let current = self.balances.get(&key).copied().unwrap_or(0);
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| PlatformError::InvalidInput("Balance overflow".into()))?;
        self.balances.insert(key, updated);
        Ok(())
    }
}
