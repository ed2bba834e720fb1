use crate::*;

pub(crate) fn validate_community_name(name: &str) -> Result<(), PlatformError> {
    if name.is_empty() {
        return Err(PlatformError::InvalidInput(
            "Community name cannot be empty".into(),
        ));
    }
    if name.len() > MAX_COMMUNITY_NAME_LEN {
        return Err(PlatformError::InvalidInput(format!(
            "Community name exceeds max length of {} bytes",
            MAX_COMMUNITY_NAME_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_uri(uri: &str) -> Result<(), PlatformError> {
    if uri.len() > MAX_URI_LEN {
        return Err(PlatformError::InvalidInput(format!(
            "URI exceeds max length of {} bytes",
            MAX_URI_LEN
        )));
    }
    Ok(())
}

/// Shared by split creation, split updates and royalty split setup.
pub(crate) fn validate_split_config(
    accounts: &[AccountId],
    allocations: &[u32],
    distributor_fee: u32,
) -> Result<(), PlatformError> {
    if accounts.len() < MIN_SPLIT_ACCOUNTS {
        return Err(PlatformError::TooFewAccounts(accounts.len() as u32));
    }
    if accounts.len() > MAX_SPLIT_ACCOUNTS {
        return Err(PlatformError::InvalidInput(format!(
            "Maximum {} split recipients",
            MAX_SPLIT_ACCOUNTS
        )));
    }
    if accounts.len() != allocations.len() {
        return Err(PlatformError::AccountsAndAllocationsMismatch(
            accounts.len() as u32,
            allocations.len() as u32,
        ));
    }
    // Sum in u64: 100 entries of u32::MAX must not trip overflow checks.
    let sum: u64 = allocations.iter().map(|a| u64::from(*a)).sum();
    if sum != u64::from(TOTAL_ALLOCATION) {
        return Err(PlatformError::InvalidAllocationsSum(
            u32::try_from(sum).unwrap_or(u32::MAX),
        ));
    }
    for (i, account) in accounts.iter().enumerate() {
        if allocations[i] == 0 {
            return Err(PlatformError::InvalidInput(format!(
                "Allocation for {} must be > 0",
                account
            )));
        }
        if accounts[..i].contains(account) {
            return Err(PlatformError::InvalidInput(format!(
                "Duplicate split recipient: {}",
                account
            )));
        }
    }
    if distributor_fee > MAX_DISTRIBUTOR_FEE {
        return Err(PlatformError::InvalidDistributorFee(distributor_fee));
    }
    Ok(())
}

pub fn default_true() -> bool {
    true
}
