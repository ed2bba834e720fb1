use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{env, near, AccountId, NearToken, PanicOnDefault, Promise, PromiseOrValue};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod external;
mod protocol;
mod storage;

mod community;
mod registry;
mod splits;

mod admin;
mod dispatch;
mod execute;
mod ft_receiver;


pub use community::types::RoyaltyInfo;
pub use community::{Community, ManagerKind, TokenManager, TokenRecord};
pub use constants::*;
pub use errors::PlatformError;
pub use events::{CommunityEvent, RegistryEvent, SplitEvent};
pub(crate) use guards::{check_not_paused, check_one_yocto};
pub use protocol::{Action, Options, Request, SplitConfig, TransferData};
pub use splits::{Asset, Split};
pub use storage::StorageKey;
pub use validation::default_true;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/communities-protocol/communities-contracts",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    // Seed platform role holder for every new community.
    pub platform_account: AccountId,
    // Custody account with implicit operator approval for live executors.
    pub vault_id: AccountId,
    pub marketplace_account: AccountId,

    pub platform_executors: Vec<AccountId>,
    pub whitelisted_currencies: Vec<AccountId>,
    // Snapshot source: copied into each community at creation time.
    pub default_manager_ids: Vec<String>,

    pub communities: IterableMap<String, Community>,
    // Balance invariant: per token, rows sum to the token's total supply.
    pub(crate) balances: LookupMap<(String, u64, AccountId), u128>,
    pub(crate) tokens: LookupMap<(String, u64), TokenRecord>,
    // Rows exist only for approved = true; revocation deletes the row.
    pub(crate) operator_approvals: LookupMap<(String, AccountId, AccountId), bool>,

    pub managers: IterableMap<String, TokenManager>,
    pub next_manager_seq: u64,

    pub splits: IterableMap<String, Split>,
    // Pooled funds awaiting distribution, per (split, asset).
    pub(crate) split_balances: LookupMap<(String, Asset), u128>,
    // Distributed funds awaiting withdrawal, per (account, asset).
    pub(crate) withdrawable: LookupMap<(AccountId, Asset), u128>,

    // Reentrancy latch for the execute envelope.
    #[borsh(skip)]
    pub(crate) in_progress: bool,
    // Persistence invariant: transient execution balance is non-persistent and
    // excluded from serialization.
    #[borsh(skip)]
    pub pending_attached_balance: u128,
}
