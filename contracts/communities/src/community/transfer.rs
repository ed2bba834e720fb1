use crate::*;
use near_sdk::json_types::U128;

impl Contract {
    pub(crate) fn transfer_tokens(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        from: AccountId,
        to: AccountId,
        token_id: u64,
        amount: U128,
        data: Option<TransferData>,
    ) -> Result<(), PlatformError> {
        let community = self.load_community(community_id)?;
        check_not_paused(&community)?;
        self.check_transfer_auth(community_id, &from, actor_id)?;
        self.check_transfer_policy(community_id, token_id, actor_id)?;

        self.debit_balance(community_id, token_id, &from, amount.0)?;
        self.credit_balance(community_id, token_id, &to, amount.0)?;
        CommunityEvent::TransferSingle {
            community_id: community_id.to_string(),
            operator: actor_id.clone(),
            from: Some(from),
            to: to.clone(),
            token_id,
            amount,
        }
        .emit();

        self.apply_transfer_data(&community, community_id, &to, data.as_ref(), actor_id);
        Ok(())
    }

    pub(crate) fn batch_transfer_tokens(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        from: AccountId,
        to: AccountId,
        token_ids: Vec<u64>,
        amounts: Vec<U128>,
        data: Option<TransferData>,
    ) -> Result<(), PlatformError> {
        let community = self.load_community(community_id)?;
        check_not_paused(&community)?;
        self.check_transfer_auth(community_id, &from, actor_id)?;
        check_batch_arrays(token_ids.len(), amounts.len())?;

        // Errors abort the whole call, so sequential debits stay
        // all-or-nothing even when a token id repeats within the batch.
        for (i, token_id) in token_ids.iter().enumerate() {
            self.check_transfer_policy(community_id, *token_id, actor_id)?;
            self.debit_balance(community_id, *token_id, &from, amounts[i].0)?;
            self.credit_balance(community_id, *token_id, &to, amounts[i].0)?;
        }
        CommunityEvent::TransferBatch {
            community_id: community_id.to_string(),
            operator: actor_id.clone(),
            from,
            to: to.clone(),
            token_ids,
            amounts,
        }
        .emit();

        self.apply_transfer_data(&community, community_id, &to, data.as_ref(), actor_id);
        Ok(())
    }

    /// Fan-out variant: one (token, amount) pair per recipient, all debited
    /// from the same holder.
    pub(crate) fn batch_transfer_to_many(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        from: AccountId,
        recipients: Vec<AccountId>,
        token_ids: Vec<u64>,
        amounts: Vec<U128>,
        data: Option<TransferData>,
    ) -> Result<(), PlatformError> {
        let community = self.load_community(community_id)?;
        check_not_paused(&community)?;
        self.check_transfer_auth(community_id, &from, actor_id)?;
        check_batch_arrays(token_ids.len(), amounts.len())?;
        if recipients.len() != token_ids.len() {
            return Err(PlatformError::InvalidInput(
                "recipients and token_ids length mismatch".into(),
            ));
        }

        for (i, recipient) in recipients.iter().enumerate() {
            self.check_transfer_policy(community_id, token_ids[i], actor_id)?;
            self.debit_balance(community_id, token_ids[i], &from, amounts[i].0)?;
            self.credit_balance(community_id, token_ids[i], recipient, amounts[i].0)?;
            CommunityEvent::TransferSingle {
                community_id: community_id.to_string(),
                operator: actor_id.clone(),
                from: Some(from.clone()),
                to: recipient.clone(),
                token_id: token_ids[i],
                amount: amounts[i],
            }
            .emit();
            self.apply_transfer_data(&community, community_id, recipient, data.as_ref(), actor_id);
        }
        Ok(())
    }

    pub(crate) fn set_approval_for_all(
        &mut self,
        actor_id: &AccountId,
        community_id: &str,
        operator: AccountId,
        approved: bool,
    ) -> Result<(), PlatformError> {
        let community = self.load_community(community_id)?;
        check_not_paused(&community)?;
        if &operator == actor_id {
            return Err(PlatformError::InvalidInput(
                "Cannot set approval for self".into(),
            ));
        }
        self.write_operator_approval(community_id, actor_id, &operator, approved);
        CommunityEvent::ApprovalForAll {
            community_id: community_id.to_string(),
            owner: actor_id.clone(),
            operator,
            approved,
        }
        .emit();
        Ok(())
    }

    /// The vault is implicitly approved to every live platform executor;
    /// deprecating an executor revokes that access on the spot.
    pub(crate) fn is_approved_operator(
        &self,
        community_id: &str,
        owner: &AccountId,
        operator: &AccountId,
    ) -> bool {
        if owner == &self.vault_id && self.platform_executors.contains(operator) {
            return true;
        }
        self.operator_approvals
            .get(&(community_id.to_string(), owner.clone(), operator.clone()))
            .copied()
            .unwrap_or(false)
    }

    fn check_transfer_auth(
        &self,
        community_id: &str,
        from: &AccountId,
        actor_id: &AccountId,
    ) -> Result<(), PlatformError> {
        if actor_id == from || self.is_approved_operator(community_id, from, actor_id) {
            return Ok(());
        }
        Err(PlatformError::caller_unauthorized())
    }

    /// Consults the owning manager's policy for one token movement.
    fn check_transfer_policy(
        &self,
        community_id: &str,
        token_id: u64,
        actor_id: &AccountId,
    ) -> Result<(), PlatformError> {
        let token = self
            .tokens
            .get(&(community_id.to_string(), token_id))
            .ok_or_else(|| PlatformError::token_not_found(token_id))?;
        let manager = self
            .managers
            .get(&token.manager_id)
            .ok_or_else(|| PlatformError::manager_not_found(&token.manager_id))?;
        match manager.kind {
            ManagerKind::Basic => Ok(()),
            ManagerKind::NonTransferable => {
                if self.platform_executors.contains(actor_id) {
                    Ok(())
                } else {
                    Err(PlatformError::non_transferable())
                }
            }
            // Hook variant: no mandated side effect, pass-through base case.
            ManagerKind::TransferHook => Ok(()),
        }
    }

    /// Honors the side-channel approve flag: platform-class actors grant the
    /// marketplace blanket operator rights for the recipient, everyone else's
    /// flag is ignored.
    fn apply_transfer_data(
        &mut self,
        community: &Community,
        community_id: &str,
        recipient: &AccountId,
        data: Option<&TransferData>,
        actor_id: &AccountId,
    ) {
        let Some(data) = data else { return };
        if !data.approve_marketplace {
            return;
        }
        if !self.is_platform_class(community, actor_id) {
            return;
        }
        let marketplace = self.marketplace_account.clone();
        if &marketplace == recipient {
            return;
        }
        self.write_operator_approval(community_id, recipient, &marketplace, true);
        CommunityEvent::ApprovalForAll {
            community_id: community_id.to_string(),
            owner: recipient.clone(),
            operator: marketplace,
            approved: true,
        }
        .emit();
    }

    fn write_operator_approval(
        &mut self,
        community_id: &str,
        owner: &AccountId,
        operator: &AccountId,
        approved: bool,
    ) {
        let key = (community_id.to_string(), owner.clone(), operator.clone());
        if approved {
            self.operator_approvals.insert(key, true);
        } else {
            self.operator_approvals.remove(&key);
        }
    }

    pub(crate) fn debit_balance(
        &mut self,
        community_id: &str,
        token_id: u64,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<(), PlatformError> {
        let key = (community_id.to_string(), token_id, account_id.clone());
        let current = self.balances.get(&key).copied().unwrap_or(0);
        if current < amount {
            return Err(PlatformError::InsufficientBalance(format!(
                "Token {} balance {} is less than {}",
                token_id, current, amount
            )));
        }
        let remaining = current - amount;
        if remaining == 0 {
            self.balances.remove(&key);
        } else {
            self.balances.insert(key, remaining);
        }
        Ok(())
    }
}

fn check_batch_arrays(token_count: usize, amount_count: usize) -> Result<(), PlatformError> {
    if token_count == 0 {
        return Err(PlatformError::EmptyArray("token_ids cannot be empty".into()));
    }
    if token_count != amount_count {
        return Err(PlatformError::InvalidInput(
            "token_ids and amounts length mismatch".into(),
        ));
    }
    if token_count > MAX_BATCH_TRANSFER {
        return Err(PlatformError::InvalidInput(format!(
            "Maximum {} transfers per call",
            MAX_BATCH_TRANSFER
        )));
    }
    Ok(())
}
