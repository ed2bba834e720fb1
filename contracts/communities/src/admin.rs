use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        platform_account: AccountId,
        vault_id: AccountId,
        marketplace_account: AccountId,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            platform_account,
            vault_id,
            marketplace_account,
            platform_executors: Vec::new(),
            whitelisted_currencies: Vec::new(),
            default_manager_ids: Vec::new(),
            communities: IterableMap::new(StorageKey::Communities),
            balances: LookupMap::new(StorageKey::Balances),
            tokens: LookupMap::new(StorageKey::Tokens),
            operator_approvals: LookupMap::new(StorageKey::OperatorApprovals),
            managers: IterableMap::new(StorageKey::Managers),
            next_manager_seq: 0,
            splits: IterableMap::new(StorageKey::Splits),
            split_balances: LookupMap::new(StorageKey::SplitBalances),
            withdrawable: LookupMap::new(StorageKey::Withdrawable),
            in_progress: false,
            pending_attached_balance: 0,
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), PlatformError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(PlatformError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner);
        RegistryEvent::OwnershipTransferred {
            old_owner,
            new_owner: self.owner_id.clone(),
        }
        .emit();
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_platform_account(&self) -> &AccountId {
        &self.platform_account
    }

    pub fn get_vault(&self) -> &AccountId {
        &self.vault_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
