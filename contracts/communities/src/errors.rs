use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum PlatformError {
    Unauthorized(String),
    InvalidInput(String),
    EmptyArray(String),
    AlreadySet(String),
    NotSet(String),
    NotFound(String),
    Paused,
    InvalidState(String),
    InsufficientBalance(String),
    InsufficientDeposit(String),
    UnregisteredManager(String),
    NoExistingManager(u64),
    CutTooBig(u16),
    TooFewAccounts(u32),
    AccountsAndAllocationsMismatch(u32, u32),
    InvalidAllocationsSum(u32),
    InvalidDistributorFee(u32),
    InvalidNewSecondaryController(AccountId),
    InvalidRemovedSecondaryController(AccountId),
    InternalError(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::EmptyArray(msg) => write!(f, "Empty array: {}", msg),
            Self::AlreadySet(msg) => write!(f, "Already set: {}", msg),
            Self::NotSet(msg) => write!(f, "Not set: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Paused => write!(f, "Community is paused"),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientBalance(msg) => write!(f, "Insufficient balance: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::UnregisteredManager(msg) => write!(f, "Unregistered token manager: {}", msg),
            Self::NoExistingManager(token_id) => {
                write!(f, "Token {} has no existing manager", token_id)
            }
            Self::CutTooBig(bps) => write!(f, "Royalty cut too big: {} bps", bps),
            Self::TooFewAccounts(n) => write!(f, "Too few accounts: {}", n),
            Self::AccountsAndAllocationsMismatch(a, b) => {
                write!(f, "Accounts and allocations mismatch: {} vs {}", a, b)
            }
            Self::InvalidAllocationsSum(sum) => write!(f, "Invalid allocations sum: {}", sum),
            Self::InvalidDistributorFee(fee) => write!(f, "Invalid distributor fee: {}", fee),
            Self::InvalidNewSecondaryController(account) => {
                write!(f, "Invalid new secondary controller: {}", account)
            }
            Self::InvalidRemovedSecondaryController(account) => {
                write!(f, "Invalid removed secondary controller: {}", account)
            }
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl PlatformError {
    pub fn community_not_found(id: &str) -> Self {
        Self::NotFound(format!("Community not found: {}", id))
    }
    pub fn token_not_found(token_id: u64) -> Self {
        Self::NotFound(format!("Token not found: {}", token_id))
    }
    pub fn manager_not_found(id: &str) -> Self {
        Self::NotFound(format!("Token manager not found: {}", id))
    }
    pub fn split_not_found(id: &str) -> Self {
        Self::NotFound(format!("Split not found: {}", id))
    }
    pub fn caller_unauthorized() -> Self {
        Self::Unauthorized("Caller is not owner nor approved".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn non_transferable() -> Self {
        Self::Unauthorized("Non-transferable".into())
    }
    pub fn read_manager_not_set() -> Self {
        Self::NotSet("Community manager not set".into())
    }
}
