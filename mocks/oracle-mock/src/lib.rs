#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod oracle_mock_proxy;

// Same encoding as the client-rewards view types.

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    Pending,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
    Vetoed,
    ObjectionPeriod,
    Updatable,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalSnapshot<M: ManagedTypeApi> {
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub abstain_votes: BigUint<M>,
    pub quorum_votes: BigUint<M>,
    pub end_block: u64,
    pub update_period_end_block: u64,
    pub executed: bool,
    pub signer_count: u32,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteClientData<M: ManagedTypeApi> {
    pub client_id: u32,
    pub votes: BigUint<M>,
}

/// Stands in for both the governance and the auction contract in scenario
/// tests. State is written through the `set*` endpoints.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ── Governance ──

    #[endpoint(setProposal)]
    fn set_proposal(
        &self,
        proposal_id: u64,
        client_id: u32,
        snapshot: ProposalSnapshot<Self::Api>,
    ) {
        self.proposal_client_id(proposal_id).set(client_id);
        self.proposals(proposal_id).set(snapshot);
    }

    #[endpoint(setProposalState)]
    fn set_proposal_state(&self, proposal_id: u64, state: ProposalState) {
        self.proposal_state(proposal_id).set(state);
    }

    #[endpoint(setVoteClientVotes)]
    fn set_vote_client_votes(&self, proposal_id: u64, client_id: u32, votes: BigUint) {
        self.vote_client_votes(proposal_id, client_id).set(votes);
    }

    #[view(getProposalForRewards)]
    fn get_proposal_for_rewards(&self, proposal_id: u64) -> ProposalSnapshot<Self::Api> {
        require!(!self.proposals(proposal_id).is_empty(), "unknown proposal");
        self.proposals(proposal_id).get()
    }

    #[view(getProposalClientId)]
    fn get_proposal_client_id(&self, proposal_id: u64) -> u32 {
        self.proposal_client_id(proposal_id).get()
    }

    #[view(getVoteClientData)]
    fn get_vote_client_data(&self, proposal_id: u64, client_id: u32) -> VoteClientData<Self::Api> {
        VoteClientData {
            client_id,
            votes: self.vote_client_votes(proposal_id, client_id).get(),
        }
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        if self.proposal_state(proposal_id).is_empty() {
            return ProposalState::Pending;
        }
        self.proposal_state(proposal_id).get()
    }

    // ── Auction ──

    #[endpoint(setCurrentNounId)]
    fn set_current_noun_id(&self, noun_id: u64) {
        self.current_noun_id().set(noun_id);
    }

    #[endpoint(setBiddingClient)]
    fn set_bidding_client(&self, noun_id: u64, client_id: u32) {
        self.bidding_client(noun_id).set(client_id);
    }

    #[view(getCurrentNounId)]
    fn get_current_noun_id(&self) -> u64 {
        self.current_noun_id().get()
    }

    #[view(getBiddingClient)]
    fn get_bidding_client(&self, noun_id: u64) -> u32 {
        self.bidding_client(noun_id).get()
    }

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<ProposalSnapshot<Self::Api>>;

    #[storage_mapper("proposalClientId")]
    fn proposal_client_id(&self, proposal_id: u64) -> SingleValueMapper<u32>;

    #[storage_mapper("proposalState")]
    fn proposal_state(&self, proposal_id: u64) -> SingleValueMapper<ProposalState>;

    #[storage_mapper("voteClientVotes")]
    fn vote_client_votes(&self, proposal_id: u64, client_id: u32) -> SingleValueMapper<BigUint>;

    #[storage_mapper("currentNounId")]
    fn current_noun_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("biddingClient")]
    fn bidding_client(&self, noun_id: u64) -> SingleValueMapper<u32>;
}
