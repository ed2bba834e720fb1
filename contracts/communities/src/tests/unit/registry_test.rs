use crate::tests::test_utils::*;
use crate::*;
use near_sdk::{testing_env, AccountId};

// --- platform executors ---

#[test]
fn add_executor_happy() {
    let mut contract = new_contract();
    contract.add_platform_executor(&owner(), executor()).unwrap();
    assert!(contract.is_platform_executor(executor()));
    assert!(!contract.is_platform_executor(fan()));
}

#[test]
fn add_executor_owner_only() {
    let mut contract = new_contract();
    for actor in [executor(), platform(), fan()] {
        let err = contract
            .add_platform_executor(&actor, executor())
            .unwrap_err();
        assert!(matches!(err, PlatformError::Unauthorized(_)));
    }
}

#[test]
fn add_executor_twice_fails() {
    let mut contract = new_contract();
    contract.add_platform_executor(&owner(), executor()).unwrap();
    let err = contract
        .add_platform_executor(&owner(), executor())
        .unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}

#[test]
fn executor_set_is_capped() {
    let mut contract = new_contract();
    for i in 0..MAX_PLATFORM_EXECUTORS {
        let executor: AccountId = format!("exec{}.near", i).parse().unwrap();
        contract.add_platform_executor(&owner(), executor).unwrap();
    }
    let err = contract
        .add_platform_executor(&owner(), executor())
        .unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}

#[test]
fn executors_listed_in_grant_order() {
    let mut contract = new_contract();
    contract.add_platform_executor(&owner(), executor()).unwrap();
    contract.add_platform_executor(&owner(), fan()).unwrap();
    contract.add_platform_executor(&owner(), collector()).unwrap();
    assert_eq!(
        contract.platform_executors(),
        vec![executor(), fan(), collector()]
    );
}

#[test]
fn deprecate_executor_removes_role() {
    let mut contract = new_contract();
    contract.add_platform_executor(&owner(), executor()).unwrap();
    contract.add_platform_executor(&owner(), fan()).unwrap();
    contract
        .deprecate_platform_executor(&owner(), executor())
        .unwrap();
    assert!(!contract.is_platform_executor(executor()));
    assert_eq!(contract.platform_executors(), vec![fan()]);
}

#[test]
fn deprecate_unknown_executor_fails() {
    let mut contract = new_contract();
    let err = contract
        .deprecate_platform_executor(&owner(), executor())
        .unwrap_err();
    assert!(matches!(err, PlatformError::NotFound(_)));
}

#[test]
fn deprecate_executor_owner_only() {
    let mut contract = new_contract();
    contract.add_platform_executor(&owner(), executor()).unwrap();
    let err = contract
        .deprecate_platform_executor(&executor(), executor())
        .unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

// --- currency whitelist ---

#[test]
fn whitelist_lifecycle() {
    let mut contract = new_contract();
    let usdc: AccountId = "usdc.near".parse().unwrap();
    assert!(!contract.is_currency_whitelisted(usdc.clone()));

    contract.whitelist_currency(&owner(), usdc.clone()).unwrap();
    assert!(contract.is_currency_whitelisted(usdc.clone()));
    assert_eq!(contract.whitelisted_currencies(), vec![usdc.clone()]);

    contract.unwhitelist_currency(&owner(), usdc.clone()).unwrap();
    assert!(!contract.is_currency_whitelisted(usdc));
    assert!(contract.whitelisted_currencies().is_empty());
}

#[test]
fn unwhitelist_keeps_remaining_order() {
    let mut contract = new_contract();
    let usdc: AccountId = "usdc.near".parse().unwrap();
    let dai: AccountId = "dai.near".parse().unwrap();
    let wnear: AccountId = "wrap.near".parse().unwrap();
    contract.whitelist_currency(&owner(), usdc.clone()).unwrap();
    contract.whitelist_currency(&owner(), dai.clone()).unwrap();
    contract.whitelist_currency(&owner(), wnear.clone()).unwrap();

    contract.unwhitelist_currency(&owner(), dai).unwrap();
    assert_eq!(contract.whitelisted_currencies(), vec![usdc, wnear]);
}

#[test]
fn whitelist_twice_fails() {
    let mut contract = new_contract();
    let usdc: AccountId = "usdc.near".parse().unwrap();
    contract.whitelist_currency(&owner(), usdc.clone()).unwrap();
    let err = contract.whitelist_currency(&owner(), usdc).unwrap_err();
    assert!(matches!(err, PlatformError::AlreadySet(_)));
}

#[test]
fn unwhitelist_missing_fails() {
    let mut contract = new_contract();
    let usdc: AccountId = "usdc.near".parse().unwrap();
    let err = contract.unwhitelist_currency(&owner(), usdc).unwrap_err();
    assert!(matches!(err, PlatformError::NotSet(_)));
}

#[test]
fn whitelist_owner_only() {
    let mut contract = new_contract();
    let usdc: AccountId = "usdc.near".parse().unwrap();
    let err = contract
        .whitelist_currency(&executor(), usdc.clone())
        .unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
    let err = contract.unwhitelist_currency(&executor(), usdc).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

// --- default managers ---

#[test]
fn default_manager_ids_roundtrip() {
    let mut contract = new_contract();
    assert!(contract.default_manager_ids().is_empty());
    let manager_id = seed_manager(&mut contract);
    contract
        .set_default_managers(&owner(), vec![manager_id.clone()])
        .unwrap();
    assert_eq!(contract.default_manager_ids(), vec![manager_id]);

    // Clearing is allowed.
    contract.set_default_managers(&owner(), Vec::new()).unwrap();
    assert!(contract.default_manager_ids().is_empty());
}

// --- contract ownership ---

#[test]
fn transfer_ownership_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(collector()).unwrap();
    assert_eq!(contract.get_owner(), &collector());

    // The previous owner holds no registry powers afterwards.
    let err = contract
        .add_platform_executor(&owner(), executor())
        .unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
    contract
        .add_platform_executor(&collector(), executor())
        .unwrap();
}

#[test]
fn transfer_ownership_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 0).build());
    let err = contract.transfer_ownership(collector()).unwrap_err();
    assert!(matches!(err, PlatformError::InsufficientDeposit(_)));
}

#[test]
fn transfer_ownership_owner_only() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(fan(), 1).build());
    let err = contract.transfer_ownership(fan()).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

#[test]
fn transfer_ownership_to_self_rejected() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}
