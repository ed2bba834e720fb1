use crate::community::ids;
use crate::community::types::RoyaltyInfo;
use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    pub fn get_community(&self, community_id: String) -> Option<Community> {
        self.communities.get(&community_id).cloned()
    }

    /// Must agree with the id `create_community` assigns for the same inputs.
    pub fn predict_community_id(
        &self,
        creator: AccountId,
        name: String,
        nonce: u64,
    ) -> Option<String> {
        ids::derive_community_id(&creator, &name, nonce).ok()
    }

    pub fn has_platform_role(&self, community_id: String, account_id: AccountId) -> bool {
        self.communities
            .get(&community_id)
            .is_some_and(|c| c.has_platform_role(&account_id))
    }

    pub fn has_community_admin_role(&self, community_id: String, account_id: AccountId) -> bool {
        self.communities
            .get(&community_id)
            .is_some_and(|c| c.has_community_admin_role(&account_id))
    }

    pub fn balance_of(&self, community_id: String, account_id: AccountId, token_id: u64) -> U128 {
        U128(
            self.balances
                .get(&(community_id, token_id, account_id))
                .copied()
                .unwrap_or(0),
        )
    }

    /// `None` when the two arrays differ in length.
    pub fn balance_of_batch(
        &self,
        community_id: String,
        account_ids: Vec<AccountId>,
        token_ids: Vec<u64>,
    ) -> Option<Vec<U128>> {
        if account_ids.len() != token_ids.len() {
            return None;
        }
        Some(
            account_ids
                .into_iter()
                .zip(token_ids)
                .map(|(account_id, token_id)| {
                    self.balance_of(community_id.clone(), account_id, token_id)
                })
                .collect(),
        )
    }

    pub fn total_supply(&self, community_id: String, token_id: u64) -> U128 {
        U128(
            self.tokens
                .get(&(community_id, token_id))
                .map(|t| t.total_supply)
                .unwrap_or(0),
        )
    }

    pub fn total_supply_batch(&self, community_id: String, token_ids: Vec<u64>) -> Vec<U128> {
        token_ids
            .into_iter()
            .map(|token_id| self.total_supply(community_id.clone(), token_id))
            .collect()
    }

    pub fn token_uri(&self, community_id: String, token_id: u64) -> Option<String> {
        self.tokens
            .get(&(community_id, token_id))
            .map(|t| t.uri.clone())
    }

    pub fn token_manager(&self, community_id: String, token_id: u64) -> Option<String> {
        self.tokens
            .get(&(community_id, token_id))
            .map(|t| t.manager_id.clone())
    }

    pub fn token_manager_batch(
        &self,
        community_id: String,
        token_ids: Vec<u64>,
    ) -> Vec<Option<String>> {
        token_ids
            .into_iter()
            .map(|token_id| self.token_manager(community_id.clone(), token_id))
            .collect()
    }

    pub fn get_token_manager_record(&self, manager_id: String) -> Option<TokenManager> {
        self.managers.get(&manager_id).cloned()
    }

    pub fn registered_managers(&self, community_id: String) -> Vec<String> {
        self.communities
            .get(&community_id)
            .map(|c| c.registered_managers.clone())
            .unwrap_or_default()
    }

    pub fn is_approved_for_all(
        &self,
        community_id: String,
        owner: AccountId,
        operator: AccountId,
    ) -> bool {
        self.is_approved_operator(&community_id, &owner, &operator)
    }

    pub fn is_membership_token(&self, token_id: u64) -> bool {
        ids::is_membership_id(token_id)
    }

    /// `None` until the community configures its royalty split.
    pub fn royalty_info(&self, community_id: String, sale_price: U128) -> Option<RoyaltyInfo> {
        let community = self.communities.get(&community_id)?;
        let split_id = community.royalty_split_id.clone()?;
        let royalty_amount = crate::splits::proportional(
            sale_price.0,
            u128::from(community.royalty_cut_bps),
            u128::from(BASIS_POINTS),
        );
        Some(RoyaltyInfo {
            split_id,
            royalty_amount: U128(royalty_amount),
        })
    }
}
