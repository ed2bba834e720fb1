use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

use crate::community::ManagerKind;
use crate::splits::Asset;

#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone)]
pub enum Action {
    AddPlatformExecutor {
        executor: AccountId,
    },
    DeprecatePlatformExecutor {
        executor: AccountId,
    },
    WhitelistCurrency {
        currency: AccountId,
    },
    UnwhitelistCurrency {
        currency: AccountId,
    },
    SetDefaultManagers {
        manager_ids: Vec<String>,
    },

    CreateCommunity {
        name: String,
        contract_uri: String,
        creator_admin: AccountId,
        default_admin: AccountId,
        community_owner: Option<AccountId>,
        #[serde(default)]
        nonce: u64,
    },
    PauseCommunity {
        community_id: String,
    },
    UnpauseCommunity {
        community_id: String,
    },
    SwapDefaultAdmin {
        community_id: String,
        new_admin: AccountId,
    },
    SwapPlatform {
        community_id: String,
        new_account: AccountId,
    },
    GrantCommunityAdmin {
        community_id: String,
        account: AccountId,
    },
    RevokeCommunityAdmin {
        community_id: String,
        account: AccountId,
    },
    TransferCommunityOwnership {
        community_id: String,
        new_owner: AccountId,
    },
    SetContractMetadata {
        community_id: String,
        update_uri: bool,
        update_name: bool,
        #[serde(default)]
        uri: String,
        #[serde(default)]
        name: String,
    },
    SetReadManager {
        community_id: String,
        manager: AccountId,
        /// Community the manager account declares itself built for. Absent
        /// for accounts that are not read managers at all.
        manager_community: Option<String>,
    },
    SetRoyaltyCut {
        community_id: String,
        cut_bps: u16,
    },
    SetRoyaltySplit {
        community_id: String,
        #[serde(flatten)]
        config: SplitConfig,
    },

    CreateTokenManager {
        kind: ManagerKind,
        community_id: Option<String>,
    },
    RegisterTokenManager {
        community_id: String,
        manager_id: String,
    },
    UnregisterTokenManager {
        community_id: String,
        manager_id: String,
    },
    SetTokenManager {
        community_id: String,
        token_id: u64,
        manager_id: String,
    },
    MintNewTokensToOne {
        community_id: String,
        manager_id: String,
        to: AccountId,
        amounts: Vec<U128>,
        #[serde(default)]
        uris: Vec<String>,
        is_membership: Vec<bool>,
    },
    MintNewTokenToMultiple {
        community_id: String,
        manager_id: String,
        recipients: Vec<AccountId>,
        amounts: Vec<U128>,
        #[serde(default)]
        uri: String,
        is_membership: bool,
    },
    SetTokenUri {
        community_id: String,
        token_id: u64,
        uri: String,
    },
    TransferTokens {
        community_id: String,
        from: AccountId,
        to: AccountId,
        token_id: u64,
        amount: U128,
        data: Option<TransferData>,
    },
    BatchTransferTokens {
        community_id: String,
        from: AccountId,
        to: AccountId,
        token_ids: Vec<u64>,
        amounts: Vec<U128>,
        data: Option<TransferData>,
    },
    BatchTransferToMany {
        community_id: String,
        from: AccountId,
        recipients: Vec<AccountId>,
        token_ids: Vec<u64>,
        amounts: Vec<U128>,
        data: Option<TransferData>,
    },
    SetApprovalForAll {
        community_id: String,
        operator: AccountId,
        approved: bool,
    },

    CreateSplit {
        #[serde(flatten)]
        config: SplitConfig,
    },
    UpdateSplit {
        split_id: String,
        accounts: Vec<AccountId>,
        allocations: Vec<u32>,
        #[serde(default)]
        distributor_fee: u32,
    },
    GrantPrimaryController {
        split_id: String,
        new_controller: AccountId,
    },
    RenouncePrimaryController {
        split_id: String,
    },
    GrantSecondaryController {
        split_id: String,
        controller: AccountId,
    },
    RevokeSecondaryController {
        split_id: String,
        controller: AccountId,
    },
    DepositToSplit {
        split_id: String,
    },
    Distribute {
        split_id: String,
        asset: Asset,
        distributor: Option<AccountId>,
    },
    Withdraw {
        account: AccountId,
        #[serde(default = "crate::default_true")]
        withdraw_native: bool,
        #[serde(default)]
        ft_assets: Vec<AccountId>,
    },
}

/// Split parameters shared by split creation and royalty split setup.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct SplitConfig {
    pub accounts: Vec<AccountId>,
    pub allocations: Vec<u32>,
    #[serde(default)]
    pub distributor_fee: u32,
    pub primary_controller: Option<AccountId>,
    #[serde(default)]
    pub secondary_controllers: Vec<AccountId>,
}

/// Side-channel payload carried by transfers. Holds the one flag the
/// platform honors on receipt.
#[near(serializers = [json])]
#[derive(Default, Clone)]
pub struct TransferData {
    #[serde(default)]
    pub approve_marketplace: bool,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct Request {
    pub target_account: Option<AccountId>,
    pub action: Action,
    pub options: Option<Options>,
}

#[near(serializers = [json])]
#[derive(Default, Clone)]
pub struct Options {
    #[serde(default)]
    pub refund_unused_deposit: bool,
}

impl Action {
    /// Security boundary for direct calls: require 1 yoctoNEAR unless the
    /// action is permissionless or already carries payment semantics.
    /// New variants default to requiring confirmation unless exempted here.
    pub fn requires_confirmation(&self) -> bool {
        !matches!(
            self,
            Self::CreateCommunity { .. }
                | Self::CreateSplit { .. }
                | Self::DepositToSplit { .. }
                | Self::Distribute { .. }
                | Self::Withdraw { .. }
        )
    }
}
