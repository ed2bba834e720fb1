use near_sdk::NearToken;

pub const BASIS_POINTS: u16 = 10_000; // 100%

// Allocation invariant: every split's weights must sum to exactly this many parts.
pub const TOTAL_ALLOCATION: u32 = 1_000_000;
// Fee cap: a distributor may keep at most 10% of a distribution.
pub const MAX_DISTRIBUTOR_FEE: u32 = 100_000;
pub const MIN_SPLIT_ACCOUNTS: usize = 2;
pub const MAX_SPLIT_ACCOUNTS: usize = 100;

// Id banding invariant: membership and benefit ids alternate in bands of this width,
// so band k covers ids (k*2*BAND_WIDTH, (k+1)*2*BAND_WIDTH].
pub const BAND_WIDTH: u64 = 100;

pub const MAX_BATCH_MINT: usize = 50;
pub const MAX_BATCH_TRANSFER: usize = 50;
pub const MAX_PLATFORM_EXECUTORS: usize = 50;
pub const MAX_COMMUNITY_NAME_LEN: usize = 128;
pub const MAX_URI_LEN: usize = 2_048;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_FT_TRANSFER_TGAS: u64 = 15;
