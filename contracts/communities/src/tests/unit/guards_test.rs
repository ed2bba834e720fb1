use crate::guards::*;
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- check_one_yocto ---

#[test]
fn check_one_yocto_exact() {
    let ctx = context_with_deposit(owner(), 1);
    testing_env!(ctx.build());
    assert!(check_one_yocto().is_ok());
}

#[test]
fn check_one_yocto_zero_fails() {
    let ctx = context_with_deposit(owner(), 0);
    testing_env!(ctx.build());
    let err = check_one_yocto().unwrap_err();
    assert!(matches!(err, PlatformError::InsufficientDeposit(_)));
}

#[test]
fn check_one_yocto_too_much_fails() {
    let ctx = context_with_deposit(owner(), 2);
    testing_env!(ctx.build());
    let err = check_one_yocto().unwrap_err();
    assert!(matches!(err, PlatformError::InsufficientDeposit(_)));
}

// --- check_not_paused ---

#[test]
fn paused_community_rejected() {
    let mut contract = new_contract();
    let community_id = seed_community(&mut contract);
    let mut community = contract.load_community(&community_id).unwrap();
    assert!(check_not_paused(&community).is_ok());
    community.paused = true;
    assert!(matches!(
        check_not_paused(&community).unwrap_err(),
        PlatformError::Paused
    ));
}

// --- check_contract_owner ---

#[test]
fn check_owner_ok() {
    let contract = new_contract();
    assert!(contract.check_contract_owner(&owner()).is_ok());
}

#[test]
fn check_owner_wrong_account() {
    let contract = new_contract();
    let err = contract.check_contract_owner(&fan()).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

// --- check_platform_executor ---

#[test]
fn executor_check_tracks_registry() {
    let mut contract = new_contract();
    assert!(contract.check_platform_executor(&executor()).is_err());
    contract.add_platform_executor(&owner(), executor()).unwrap();
    assert!(contract.check_platform_executor(&executor()).is_ok());
}

// --- platform class ---

#[test]
fn platform_class_holders() {
    let mut contract = new_contract();
    let community_id = seed_community(&mut contract);
    contract.add_platform_executor(&owner(), executor()).unwrap();
    let community = contract.load_community(&community_id).unwrap();

    assert!(contract.is_platform_class(&community, &platform()));
    assert!(contract.is_platform_class(&community, &creator()));
    assert!(contract.is_platform_class(&community, &executor()));

    // The default admin is not platform class.
    assert!(!contract.is_platform_class(&community, &admin()));
    assert!(!contract.is_platform_class(&community, &fan()));
}

#[test]
fn check_platform_class_rejects_outsider() {
    let mut contract = new_contract();
    let community_id = seed_community(&mut contract);
    let community = contract.load_community(&community_id).unwrap();
    let err = contract
        .check_platform_class(&community, &fan())
        .unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}
