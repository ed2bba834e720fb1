use near_sdk::near;
use near_sdk::AccountId;

use crate::community::ids;
use crate::errors::PlatformError;

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ManagerKind {
    #[default]
    Basic,
    NonTransferable,
    TransferHook,
}

impl ManagerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::NonTransferable => "non_transferable",
            Self::TransferHook => "transfer_hook",
        }
    }
}

/// Token manager policy record. `community_id` is `None` for shared managers
/// usable by every community, `Some` for managers bound to a single one.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenManager {
    pub kind: ManagerKind,
    pub community_id: Option<String>,
    pub created_at: u64,
}

impl TokenManager {
    /// Bound managers mint and police transfers for their own community only.
    pub fn usable_with(&self, community_id: &str) -> bool {
        match &self.community_id {
            Some(bound) => bound == community_id,
            None => true,
        }
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Community {
    pub name: String,
    pub contract_uri: String,
    pub owner: AccountId,
    // Role invariant: exactly one default admin at all times.
    pub default_admin: AccountId,
    pub platform_admins: Vec<AccountId>,
    pub community_admins: Vec<AccountId>,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub royalty_cut_bps: u16,
    // One-shot: set once through the royalty split action, never replaced.
    #[serde(default)]
    pub royalty_split_id: Option<String>,
    #[serde(default)]
    pub read_manager: Option<AccountId>,
    pub registered_managers: Vec<String>,
    // Counters hold how many ids of each kind were already allocated.
    #[serde(default)]
    pub next_membership_seq: u64,
    #[serde(default)]
    pub next_benefit_seq: u64,
    pub created_at: u64,
}

impl Community {
    pub fn has_platform_role(&self, account_id: &AccountId) -> bool {
        self.platform_admins.contains(account_id)
    }

    pub fn has_community_admin_role(&self, account_id: &AccountId) -> bool {
        self.community_admins.contains(account_id)
    }

    pub fn is_default_admin(&self, account_id: &AccountId) -> bool {
        &self.default_admin == account_id
    }

    pub(crate) fn check_default_admin(&self, actor_id: &AccountId) -> Result<(), PlatformError> {
        if !self.is_default_admin(actor_id) {
            return Err(PlatformError::only_owner("the default admin"));
        }
        Ok(())
    }

    pub(crate) fn check_platform_role(&self, actor_id: &AccountId) -> Result<(), PlatformError> {
        if !self.has_platform_role(actor_id) {
            return Err(PlatformError::only_owner("a platform role holder"));
        }
        Ok(())
    }

    pub(crate) fn check_community_owner(&self, actor_id: &AccountId) -> Result<(), PlatformError> {
        if &self.owner != actor_id {
            return Err(PlatformError::only_owner("the community owner"));
        }
        Ok(())
    }

    /// Takes the next id from the banded stream for the requested kind and
    /// advances that kind's counter.
    pub(crate) fn allocate_token_id(&mut self, is_membership: bool) -> u64 {
        if is_membership {
            let token_id = ids::membership_token_id(self.next_membership_seq);
            self.next_membership_seq += 1;
            token_id
        } else {
            let token_id = ids::benefit_token_id(self.next_benefit_seq);
            self.next_benefit_seq += 1;
            token_id
        }
    }
}

/// Per-token ledger record, created on first mint. Whether the token is a
/// membership token is derived from its id band, never stored.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenRecord {
    pub manager_id: String,
    pub uri: String,
    pub total_supply: u128,
}

#[near(serializers = [json])]
pub struct RoyaltyInfo {
    pub split_id: String,
    pub royalty_amount: near_sdk::json_types::U128,
}
