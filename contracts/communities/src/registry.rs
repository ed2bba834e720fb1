use crate::*;

impl Contract {
    /// Grants an account the platform executor role. Executors may relay
    /// actions for other accounts and hold implicit vault approval in every
    /// community.
    pub(crate) fn add_platform_executor(
        &mut self,
        actor_id: &AccountId,
        executor: AccountId,
    ) -> Result<(), PlatformError> {
        self.check_contract_owner(actor_id)?;
        if self.platform_executors.contains(&executor) {
            return Err(PlatformError::InvalidInput(format!(
                "{executor} is already a platform executor"
            )));
        }
        if self.platform_executors.len() >= MAX_PLATFORM_EXECUTORS {
            return Err(PlatformError::InvalidInput(format!(
                "Cannot exceed {MAX_PLATFORM_EXECUTORS} platform executors"
            )));
        }
        self.platform_executors.push(executor.clone());
        RegistryEvent::PlatformExecutorAdded { executor }.emit();
        Ok(())
    }

    pub(crate) fn deprecate_platform_executor(
        &mut self,
        actor_id: &AccountId,
        executor: AccountId,
    ) -> Result<(), PlatformError> {
        self.check_contract_owner(actor_id)?;
        if !self.platform_executors.contains(&executor) {
            return Err(PlatformError::NotFound(format!(
                "{executor} is not a platform executor"
            )));
        }
        self.platform_executors.retain(|e| e != &executor);
        RegistryEvent::PlatformExecutorDeprecated { executor }.emit();
        Ok(())
    }

    /// Admits a NEP-141 contract as a deposit currency for splits.
    pub(crate) fn whitelist_currency(
        &mut self,
        actor_id: &AccountId,
        currency: AccountId,
    ) -> Result<(), PlatformError> {
        self.check_contract_owner(actor_id)?;
        if self.whitelisted_currencies.contains(&currency) {
            return Err(PlatformError::AlreadySet("Already whitelisted".to_string()));
        }
        self.whitelisted_currencies.push(currency.clone());
        RegistryEvent::CurrencyWhitelisted { currency }.emit();
        Ok(())
    }

    pub(crate) fn unwhitelist_currency(
        &mut self,
        actor_id: &AccountId,
        currency: AccountId,
    ) -> Result<(), PlatformError> {
        self.check_contract_owner(actor_id)?;
        if !self.whitelisted_currencies.contains(&currency) {
            return Err(PlatformError::NotSet("Not whitelisted".to_string()));
        }
        self.whitelisted_currencies.retain(|c| c != &currency);
        RegistryEvent::CurrencyUnwhitelisted { currency }.emit();
        Ok(())
    }
}

#[near]
impl Contract {
    pub fn is_platform_executor(&self, account_id: AccountId) -> bool {
        self.platform_executors.contains(&account_id)
    }

    /// Executors in grant order.
    pub fn platform_executors(&self) -> Vec<AccountId> {
        self.platform_executors.clone()
    }

    pub fn is_currency_whitelisted(&self, currency: AccountId) -> bool {
        self.whitelisted_currencies.contains(&currency)
    }

    pub fn whitelisted_currencies(&self) -> Vec<AccountId> {
        self.whitelisted_currencies.clone()
    }

    pub fn default_manager_ids(&self) -> Vec<String> {
        self.default_manager_ids.clone()
    }
}
