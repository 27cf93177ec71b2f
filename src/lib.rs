#![no_std]

multiversx_sc::imports!();

pub mod auction_proxy;
pub mod client_registry;
pub mod client_rewards_proxy;
pub mod disburse;
pub mod errors;
pub mod governance_proxy;
pub mod oracle;
pub mod payment_ledger;
pub mod rewards;
pub mod types;

use errors::*;
use types::{RewardKind, RewardParams};

// ============================================================
// Contract
// ============================================================

/// Pays integrators ("clients") for proposals, votes and auction bids they
/// brought in, once governance or the auction house reports the action as
/// final. Each `(event, kind)` bucket pays out at most once.
#[multiversx_sc::contract]
pub trait ClientRewards:
    client_registry::ClientRegistryModule
    + oracle::OracleModule
    + payment_ledger::PaymentLedgerModule
    + disburse::DisburseModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        governance_address: ManagedAddress,
        auction_address: ManagedAddress,
        proposal_creation: BigUint,
        proposal_by_sigs_creation: BigUint,
        auction_bidding: BigUint,
        proposal_voting: BigUint,
        voting_first_place: BigUint,
    ) {
        require!(!governance_address.is_zero(), ERR_ZERO_ADDRESS);
        require!(!auction_address.is_zero(), ERR_ZERO_ADDRESS);

        let caller = self.blockchain().get_caller();
        self.owner().set(caller);
        self.paused().set(false);
        self.governance_address().set(governance_address);
        self.auction_address().set(auction_address);
        self.reward_params().set(RewardParams {
            proposal_creation,
            proposal_by_sigs_creation,
            auction_bidding,
            proposal_voting,
            voting_first_place,
        });
        self.total_paid().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: registerClient
    // Anyone may claim an unused client id; the wallet is permanent.
    // ========================================================

    #[endpoint(registerClient)]
    fn register_client(&self, client_id: u32, payout_destination: ManagedAddress) {
        self.require_not_paused();
        self.register(client_id, &payout_destination);
    }

    // ========================================================
    // ENDPOINT: fund
    // Tops up the reward pool. Rewards are paid from this balance.
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        self.pool_funded_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: claimProposalCreationReward
    // Flat reward to the client that submitted a proposal which
    // reached quorum and whose voting and update windows closed.
    // ========================================================

    #[endpoint(claimProposalCreationReward)]
    fn claim_proposal_creation_reward(&self, proposal_id: u64) {
        self.require_not_paused();

        let snapshot = self.proposal_snapshot(proposal_id);
        let client_id = self.proposal_client_id(proposal_id);

        let kind = rewards::proposal_creation_kind(&snapshot);
        self.try_mark_paid(proposal_id, &kind);

        let amount = rewards::proposal_creation_reward(
            &snapshot,
            &self.reward_params().get(),
            self.blockchain().get_block_nonce(),
        )
        .unwrap_or_else(|err| sc_panic!(err.message()));

        self.pay(client_id, &amount, proposal_id, &kind);
    }

    // ========================================================
    // ENDPOINT: claimAuctionBiddingReward
    // Flat reward to the client of the winning bid, once the
    // auction house has moved on to a later noun.
    // ========================================================

    #[endpoint(claimAuctionBiddingReward)]
    fn claim_auction_bidding_reward(&self, noun_id: u64) {
        self.require_not_paused();

        let current_noun_id = self.current_auction_noun_id();
        let client_id = self.bidding_client(noun_id);

        let kind = RewardKind::AuctionBidding;
        self.try_mark_paid(noun_id, &kind);

        let amount =
            rewards::auction_bidding_reward(noun_id, current_noun_id, &self.reward_params().get())
                .unwrap_or_else(|err| sc_panic!(err.message()));

        self.pay(client_id, &amount, noun_id, &kind);
    }

    // ========================================================
    // ENDPOINT: claimProportionalVotingReward
    // The client's vote-weighted share of the voting pool. The pool
    // amount is fixed per proposal by its first successful claim.
    // ========================================================

    #[endpoint(claimProportionalVotingReward)]
    fn claim_proportional_voting_reward(&self, proposal_id: u64, client_id: u32) {
        self.require_not_paused();

        let snapshot = self.proposal_snapshot(proposal_id);
        let vote_data = self.vote_client_data(proposal_id, client_id);

        let kind = RewardKind::ProportionalVoting(client_id);
        self.try_mark_paid(proposal_id, &kind);

        let mut params = self.reward_params().get();
        let voting_pool = self.voting_pool(proposal_id);
        if voting_pool.is_empty() {
            voting_pool.set(&params.proposal_voting);
        } else {
            params.proposal_voting = voting_pool.get();
        }

        let amount = rewards::proportional_voting_reward(
            &snapshot,
            &vote_data.votes,
            &params,
            self.blockchain().get_block_nonce(),
        )
        .unwrap_or_else(|err| sc_panic!(err.message()));

        self.pay(client_id, &amount, proposal_id, &kind);
    }

    // ========================================================
    // ENDPOINT: claimVotingBonusReward
    // First-place bonus on an executed proposal. The caller lists
    // every voting client by descending votes; the list is checked
    // against governance before the first entry is paid.
    // ========================================================

    #[endpoint(claimVotingBonusReward)]
    fn claim_voting_bonus_reward(
        &self,
        proposal_id: u64,
        ordered_client_ids: MultiValueEncoded<u32>,
    ) {
        self.require_not_paused();

        let state = self.proposal_execution_state(proposal_id);
        let snapshot = self.proposal_snapshot(proposal_id);
        let mut ranked = ManagedVec::new();
        for client_id in ordered_client_ids.into_iter() {
            ranked.push(self.vote_client_data(proposal_id, client_id));
        }

        let kind = RewardKind::VotingWithBonus;
        self.try_mark_paid(proposal_id, &kind);

        let winner = rewards::first_place_client(state, &ranked, &snapshot.total_votes())
            .unwrap_or_else(|err| sc_panic!(err.message()));

        let amount = self.reward_params().get().voting_first_place;
        self.pay(winner, &amount, proposal_id, &kind);
    }

    // ========================================================
    // ADMIN
    // ========================================================

    #[endpoint(setRewardParams)]
    fn set_reward_params(
        &self,
        proposal_creation: BigUint,
        proposal_by_sigs_creation: BigUint,
        auction_bidding: BigUint,
        proposal_voting: BigUint,
        voting_first_place: BigUint,
    ) {
        self.require_owner();
        let params = RewardParams {
            proposal_creation,
            proposal_by_sigs_creation,
            auction_bidding,
            proposal_voting,
            voting_first_place,
        };
        self.reward_params().set(&params);
        self.reward_params_changed_event(&self.blockchain().get_caller(), &params);
    }

    #[endpoint(setOracles)]
    fn set_oracles(&self, governance_address: ManagedAddress, auction_address: ManagedAddress) {
        self.require_owner();
        require!(!governance_address.is_zero(), ERR_ZERO_ADDRESS);
        require!(!auction_address.is_zero(), ERR_ZERO_ADDRESS);
        self.governance_address().set(governance_address);
        self.auction_address().set(auction_address);
    }

    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.require_owner();
        self.paused().set(paused);
        self.paused_changed_event(paused);
    }

    #[endpoint(setOwner)]
    fn set_owner(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_ZERO_ADDRESS);
        self.owner().set(new_owner);
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getRewardParams)]
    fn get_reward_params(&self) -> RewardParams<Self::Api> {
        self.reward_params().get()
    }

    #[view(getRewardPool)]
    fn get_reward_pool(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }

    /// Voting pool locked for a proposal, zero before its first claim.
    #[view(getVotingPool)]
    fn get_voting_pool(&self, proposal_id: u64) -> BigUint {
        self.voting_pool(proposal_id).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("poolFunded")]
    fn pool_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    #[event("rewardParamsChanged")]
    fn reward_params_changed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        params: &RewardParams<Self::Api>,
    );

    #[event("pausedChanged")]
    fn paused_changed_event(&self, #[indexed] paused: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("rewardParams")]
    fn reward_params(&self) -> SingleValueMapper<RewardParams<Self::Api>>;

    #[storage_mapper("votingPool")]
    fn voting_pool(&self, proposal_id: u64) -> SingleValueMapper<BigUint>;
}
