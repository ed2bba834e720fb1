use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::serde_json::Value;
use near_sdk::testing_env;
use near_sdk::NearToken;

fn create_community_action() -> Action {
    Action::CreateCommunity {
        name: "orbit-dao".to_string(),
        contract_uri: "ipfs://orbit".to_string(),
        creator_admin: creator(),
        default_admin: admin(),
        community_owner: None,
        nonce: 0,
    }
}

// --- actor resolution ---

#[test]
fn direct_call_acts_as_caller() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    let result = contract.execute(make_request(create_community_action())).unwrap();

    let Value::String(community_id) = result else {
        panic!("expected community id string");
    };
    let community = contract.get_community(community_id).unwrap();
    assert!(community.has_platform_role(&creator()));
}

#[test]
fn target_equal_to_caller_is_direct() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    // Naming yourself as target needs no executor role.
    contract
        .execute(relayed_request(creator(), create_community_action()))
        .unwrap();
}

#[test]
fn relay_requires_executor_role() {
    let mut contract = new_contract();
    testing_env!(context(fan()).build());
    let err = contract
        .execute(relayed_request(creator(), create_community_action()))
        .unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
    assert!(contract.communities.is_empty());
}

#[test]
fn executor_relays_as_target() {
    let mut contract = new_contract();
    contract.add_platform_executor(&owner(), executor()).unwrap();
    let community_id = seed_community(&mut contract);

    // Pause is a default-admin action; relaying as admin() makes it pass
    // without any confirmation deposit.
    testing_env!(context(executor()).build());
    contract
        .execute(relayed_request(
            admin(),
            Action::PauseCommunity {
                community_id: community_id.clone(),
            },
        ))
        .unwrap();
    assert!(contract.get_community(community_id).unwrap().paused);
}

#[test]
fn relay_does_not_escalate_target_privileges() {
    let mut contract = new_contract();
    contract.add_platform_executor(&owner(), executor()).unwrap();
    let community_id = seed_community(&mut contract);

    // fan() holds no roles, so relaying as fan() changes nothing.
    testing_env!(context(executor()).build());
    let err = contract
        .execute(relayed_request(
            fan(),
            Action::PauseCommunity { community_id },
        ))
        .unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

// --- confirmation deposits ---

#[test]
fn direct_admin_action_requires_deposit() {
    let mut contract = new_contract();
    let community_id = seed_community(&mut contract);
    testing_env!(context(admin()).build());
    let err = contract
        .execute(make_request(Action::PauseCommunity {
            community_id: community_id.clone(),
        }))
        .unwrap_err();
    assert!(matches!(err, PlatformError::InsufficientDeposit(_)));
    assert!(!contract.get_community(community_id).unwrap().paused);
}

#[test]
fn direct_admin_action_with_deposit() {
    let mut contract = new_contract();
    let community_id = seed_community(&mut contract);
    testing_env!(context_with_deposit(admin(), 1).build());
    contract
        .execute(make_request(Action::PauseCommunity {
            community_id: community_id.clone(),
        }))
        .unwrap();
    assert!(contract.get_community(community_id).unwrap().paused);
}

#[test]
fn exempt_actions_skip_confirmation() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    contract.execute(make_request(create_community_action())).unwrap();

    testing_env!(context(creator()).build());
    let result = contract
        .execute(make_request(Action::CreateSplit {
            config: split_config(),
        }))
        .unwrap();
    assert!(matches!(result, Value::String(_)));
}

// --- deposit plumbing ---

#[test]
fn deposit_action_consumes_attachment() {
    let mut contract = new_contract();
    let split_id = seed_split(&mut contract);

    testing_env!(context_with_deposit(fan(), 2_000).build());
    let result = contract
        .execute(make_request(Action::DepositToSplit {
            split_id: split_id.clone(),
        }))
        .unwrap();

    // U128 serializes as a decimal string.
    assert_eq!(result, Value::String("2000".to_string()));
    assert_eq!(contract.split_balance(split_id, Asset::Native), U128(2_000));
    assert_eq!(contract.pending_attached_balance, 0);
}

#[test]
fn unused_deposit_cleared_after_dispatch() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(creator(), 5_000).build());
    contract
        .execute(crate::Request {
            target_account: None,
            action: create_community_action(),
            options: Some(crate::Options {
                refund_unused_deposit: true,
            }),
        })
        .unwrap();
    // Nothing stays staged between calls either way.
    assert_eq!(contract.pending_attached_balance, 0);
}

// --- reentrancy latch ---

#[test]
fn nested_execute_rejected() {
    let mut contract = new_contract();
    contract.in_progress = true;
    testing_env!(context(creator()).build());
    let err = contract
        .execute(make_request(create_community_action()))
        .unwrap_err();
    assert!(matches!(err, PlatformError::InvalidState(_)));
}

#[test]
fn latch_clears_after_each_call() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    contract.execute(make_request(create_community_action())).unwrap();
    assert!(!contract.in_progress);

    // Errors also release the latch.
    testing_env!(context(creator()).build());
    contract
        .execute(make_request(create_community_action()))
        .unwrap_err();
    assert!(!contract.in_progress);
}

// --- dispatch return values ---

#[test]
fn mint_action_returns_token_ids() {
    let mut contract = new_contract();
    let community_id = seed_community(&mut contract);
    let manager_id = seed_registered_manager(&mut contract, &community_id);

    testing_env!(context_with_deposit(creator(), 1).build());
    let result = contract
        .execute(make_request(Action::MintNewTokensToOne {
            community_id: community_id.clone(),
            manager_id: manager_id.clone(),
            to: fan(),
            amounts: vec![U128(5), U128(5)],
            uris: Vec::new(),
            is_membership: vec![true, false],
        }))
        .unwrap();
    assert_eq!(result, near_sdk::serde_json::json!([1, 101]));

    testing_env!(context_with_deposit(creator(), 1).build());
    let result = contract
        .execute(make_request(Action::MintNewTokenToMultiple {
            community_id,
            manager_id,
            recipients: vec![fan(), collector()],
            amounts: vec![U128(1)],
            uri: String::new(),
            is_membership: true,
        }))
        .unwrap();
    assert_eq!(result, Value::from(2));
}

#[test]
fn plain_mutations_return_null() {
    let mut contract = new_contract();
    let split_id = seed_split(&mut contract);
    testing_env!(context_with_deposit(creator(), 1).build());
    let result = contract
        .execute(make_request(Action::UpdateSplit {
            split_id,
            accounts: vec![fan(), collector()],
            allocations: vec![500_000, 500_000],
            distributor_fee: 0,
        }))
        .unwrap();
    assert_eq!(result, Value::Null);
}

#[test]
fn registry_actions_route_through_envelope() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .execute(make_request(Action::AddPlatformExecutor {
            executor: executor(),
        }))
        .unwrap();
    assert!(contract.is_platform_executor(executor()));
}

#[test]
fn withdraw_routes_through_envelope() {
    let mut contract = new_contract();
    let split_id = seed_split(&mut contract);
    contract.pending_attached_balance = 1_000;
    contract.deposit_to_split(&fan(), &split_id).unwrap();
    contract
        .distribute(&creator(), &split_id, Asset::Native, None)
        .unwrap();

    let mut ctx = context(fan());
    ctx.account_balance(NearToken::from_near(100));
    testing_env!(ctx.build());
    contract
        .execute(make_request(Action::Withdraw {
            account: fan(),
            withdraw_native: true,
            ft_assets: Vec::new(),
        }))
        .unwrap();
    assert_eq!(contract.withdrawable_balance(fan(), Asset::Native), U128(0));
}
