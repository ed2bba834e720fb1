use crate::tests::test_utils::*;
use crate::validation::*;
use crate::*;

// --- community name ---

#[test]
fn name_ok() {
    assert!(validate_community_name("orbit-dao").is_ok());
}

#[test]
fn name_empty_fails() {
    let err = validate_community_name("").unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}

#[test]
fn name_at_limit_ok() {
    let name = "x".repeat(MAX_COMMUNITY_NAME_LEN);
    assert!(validate_community_name(&name).is_ok());
}

#[test]
fn name_over_limit_fails() {
    let name = "x".repeat(MAX_COMMUNITY_NAME_LEN + 1);
    assert!(validate_community_name(&name).is_err());
}

// --- uri ---

#[test]
fn uri_empty_ok() {
    assert!(validate_uri("").is_ok());
}

#[test]
fn uri_over_limit_fails() {
    let uri = "u".repeat(MAX_URI_LEN + 1);
    assert!(validate_uri(&uri).is_err());
}

// --- split config ---

#[test]
fn split_config_ok() {
    let config = split_config();
    assert!(validate_split_config(&config.accounts, &config.allocations, 0).is_ok());
}

#[test]
fn split_too_few_accounts() {
    let err = validate_split_config(&[fan()], &[1_000_000], 0).unwrap_err();
    assert!(matches!(err, PlatformError::TooFewAccounts(1)));
}

#[test]
fn split_too_many_accounts() {
    let accounts: Vec<AccountId> = (0..=MAX_SPLIT_ACCOUNTS)
        .map(|i| format!("acct{i}.near").parse().unwrap())
        .collect();
    let allocations = vec![1u32; accounts.len()];
    let err = validate_split_config(&accounts, &allocations, 0).unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}

#[test]
fn split_length_mismatch() {
    let err = validate_split_config(&[fan(), collector()], &[1_000_000], 0).unwrap_err();
    assert!(matches!(
        err,
        PlatformError::AccountsAndAllocationsMismatch(2, 1)
    ));
}

#[test]
fn split_bad_sum() {
    let err =
        validate_split_config(&[fan(), collector()], &[500_000, 400_000], 0).unwrap_err();
    assert!(matches!(err, PlatformError::InvalidAllocationsSum(900_000)));
}

#[test]
fn split_sum_overflowing_u32_reports_saturated() {
    let err = validate_split_config(&[fan(), collector()], &[u32::MAX, u32::MAX], 0).unwrap_err();
    assert!(matches!(
        err,
        PlatformError::InvalidAllocationsSum(u32::MAX)
    ));
}

#[test]
fn split_zero_allocation() {
    let err = validate_split_config(&[fan(), collector()], &[1_000_000, 0], 0).unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}

#[test]
fn split_duplicate_account() {
    let err = validate_split_config(&[fan(), fan()], &[500_000, 500_000], 0).unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}

#[test]
fn split_fee_at_cap_ok() {
    let config = split_config();
    assert!(
        validate_split_config(&config.accounts, &config.allocations, MAX_DISTRIBUTOR_FEE).is_ok()
    );
}

#[test]
fn split_fee_over_cap_fails() {
    let config = split_config();
    let err = validate_split_config(
        &config.accounts,
        &config.allocations,
        MAX_DISTRIBUTOR_FEE + 1,
    )
    .unwrap_err();
    assert!(matches!(err, PlatformError::InvalidDistributorFee(_)));
}
