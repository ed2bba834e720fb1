use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

use crate::splits::Asset;

#[near(event_json(standard = "nep297"))]
pub enum RegistryEvent {
    #[event_version("1.0.0")]
    PlatformExecutorAdded { executor: AccountId },
    #[event_version("1.0.0")]
    PlatformExecutorDeprecated { executor: AccountId },
    #[event_version("1.0.0")]
    CurrencyWhitelisted { currency: AccountId },
    #[event_version("1.0.0")]
    CurrencyUnwhitelisted { currency: AccountId },
    #[event_version("1.0.0")]
    OwnershipTransferred {
        old_owner: AccountId,
        new_owner: AccountId,
    },
    #[event_version("1.0.0")]
    DefaultManagersSet { manager_ids: Vec<String> },
}

#[near(event_json(standard = "nep297"))]
pub enum CommunityEvent {
    #[event_version("1.0.0")]
    CommunityDeployed {
        community_id: String,
        name: String,
        creator: AccountId,
    },
    #[event_version("1.0.0")]
    CommunityPaused {
        community_id: String,
        actor: AccountId,
    },
    #[event_version("1.0.0")]
    CommunityUnpaused {
        community_id: String,
        actor: AccountId,
    },
    #[event_version("1.0.0")]
    DefaultAdminSwapped {
        community_id: String,
        old_admin: AccountId,
        new_admin: AccountId,
    },
    #[event_version("1.0.0")]
    PlatformSwapped {
        community_id: String,
        old_account: AccountId,
        new_account: AccountId,
    },
    #[event_version("1.0.0")]
    CommunityAdminGranted {
        community_id: String,
        account: AccountId,
    },
    #[event_version("1.0.0")]
    CommunityAdminRevoked {
        community_id: String,
        account: AccountId,
    },
    #[event_version("1.0.0")]
    CommunityOwnershipTransferred {
        community_id: String,
        old_owner: AccountId,
        new_owner: AccountId,
    },
    #[event_version("1.0.0")]
    ContractMetadataSet {
        community_id: String,
        actor: AccountId,
        uri: String,
        name: String,
        set_uri: bool,
        set_name: bool,
    },
    #[event_version("1.0.0")]
    ReadManagerSet {
        community_id: String,
        manager: AccountId,
        actor: AccountId,
    },
    #[event_version("1.0.0")]
    RoyaltyCutSet {
        community_id: String,
        old_cut_bps: u16,
        new_cut_bps: u16,
    },
    #[event_version("1.0.0")]
    RoyaltySplitSet {
        community_id: String,
        split_id: String,
    },
    #[event_version("1.0.0")]
    TokenManagerDeployed {
        manager_id: String,
        kind: String,
        community_id: Option<String>,
    },
    #[event_version("1.0.0")]
    TokenManagerRegistered {
        community_id: String,
        manager_id: String,
    },
    #[event_version("1.0.0")]
    TokenManagerUnregistered {
        community_id: String,
        manager_id: String,
    },
    #[event_version("1.0.0")]
    TokenManagerSet {
        community_id: String,
        token_id: u64,
        old_manager_id: String,
        new_manager_id: String,
    },
    #[event_version("1.0.0")]
    MintedNewTokens {
        community_id: String,
        manager_id: String,
        token_ids: Vec<u64>,
        actor: AccountId,
    },
    #[event_version("1.0.0")]
    TokenUriSet {
        community_id: String,
        token_id: u64,
        uri: String,
    },
    #[event_version("1.0.0")]
    TransferSingle {
        community_id: String,
        operator: AccountId,
        from: Option<AccountId>,
        to: AccountId,
        token_id: u64,
        amount: U128,
    },
    #[event_version("1.0.0")]
    TransferBatch {
        community_id: String,
        operator: AccountId,
        from: AccountId,
        to: AccountId,
        token_ids: Vec<u64>,
        amounts: Vec<U128>,
    },
    #[event_version("1.0.0")]
    ApprovalForAll {
        community_id: String,
        owner: AccountId,
        operator: AccountId,
        approved: bool,
    },
}

#[near(event_json(standard = "nep297"))]
pub enum SplitEvent {
    #[event_version("1.0.0")]
    SplitCreated {
        split_id: String,
        creator: AccountId,
    },
    #[event_version("1.0.0")]
    SplitUpdated {
        split_id: String,
        actor: AccountId,
    },
    #[event_version("1.0.0")]
    PrimaryControllerChanged {
        split_id: String,
        old_controller: Option<AccountId>,
        new_controller: Option<AccountId>,
    },
    #[event_version("1.0.0")]
    SecondaryControllerGranted {
        split_id: String,
        controller: AccountId,
    },
    #[event_version("1.0.0")]
    SecondaryControllerRevoked {
        split_id: String,
        controller: AccountId,
    },
    #[event_version("1.0.0")]
    SplitDeposit {
        split_id: String,
        asset: Asset,
        amount: U128,
        depositor: AccountId,
    },
    #[event_version("1.0.0")]
    SplitDistributed {
        split_id: String,
        asset: Asset,
        amount: U128,
        fee: U128,
        distributor: AccountId,
    },
    #[event_version("1.0.0")]
    SplitWithdrawal {
        account: AccountId,
        asset: Asset,
        amount: U128,
    },
}
