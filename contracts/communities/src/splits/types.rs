use near_sdk::{near, AccountId};

use crate::errors::PlatformError;

/// Asset a split can hold: the chain's native token or a NEP-141 contract.
/// Doubles as a storage key component, so the ordering derives matter.
#[near(serializers = [borsh, json])]
#[serde(tag = "kind", rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Asset {
    Native,
    Ft { token: AccountId },
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Split {
    pub accounts: Vec<AccountId>,
    /// Parts-per-million weights, index-aligned with `accounts`. Invariant:
    /// sums to exactly `TOTAL_ALLOCATION`.
    pub allocations: Vec<u32>,
    pub distributor_fee: u32,
    pub primary_controller: Option<AccountId>,
    pub secondary_controllers: Vec<AccountId>,
    pub created_at: u64,
}

impl Split {
    pub fn is_primary_controller(&self, account_id: &AccountId) -> bool {
        self.primary_controller.as_ref() == Some(account_id)
    }

    pub fn is_secondary_controller(&self, account_id: &AccountId) -> bool {
        self.secondary_controllers.contains(account_id)
    }

    pub fn check_primary_controller(&self, account_id: &AccountId) -> Result<(), PlatformError> {
        if self.is_primary_controller(account_id) {
            Ok(())
        } else {
            Err(PlatformError::only_owner("the primary controller"))
        }
    }

    pub fn check_secondary_controller(&self, account_id: &AccountId) -> Result<(), PlatformError> {
        if self.is_secondary_controller(account_id) {
            Ok(())
        } else {
            Err(PlatformError::only_owner("a secondary controller"))
        }
    }
}
