use near_sdk::{env, AccountId};

use crate::constants::BAND_WIDTH;
use crate::errors::PlatformError;

const BAND_PERIOD: u64 = 2 * BAND_WIDTH;

/// Membership ids fill {1..=100, 201..=300, ...}; `seq` counts ids already
/// allocated of this kind.
pub(crate) fn membership_token_id(seq: u64) -> u64 {
    BAND_PERIOD * (seq / BAND_WIDTH) + (seq % BAND_WIDTH) + 1
}

/// Benefit ids fill the complementary bands {101..=200, 301..=400, ...}.
pub(crate) fn benefit_token_id(seq: u64) -> u64 {
    BAND_PERIOD * (seq / BAND_WIDTH) + (seq % BAND_WIDTH) + BAND_WIDTH + 1
}

pub fn is_membership_id(token_id: u64) -> bool {
    let pos = token_id % BAND_PERIOD;
    (1..=BAND_WIDTH).contains(&pos)
}

/// Community ids are content-derived so creation and prediction agree.
pub(crate) fn derive_community_id(
    creator: &AccountId,
    name: &str,
    nonce: u64,
) -> Result<String, PlatformError> {
    let bytes = near_sdk::borsh::to_vec(&(creator, name, nonce)).map_err(|_| {
        PlatformError::InternalError("Failed to encode community id preimage".into())
    })?;
    Ok(hex::encode(env::sha256(&bytes)))
}
