multiversx_sc::imports!();

use crate::auction_proxy::AuctionProxy;
use crate::governance_proxy::GovernanceProxy;
use crate::types::{ProposalSnapshot, ProposalState, VoteClientData};

/// Queries the governance and auction contracts.
///
/// Only view endpoints are called, through plain sync calls so the scenario
/// VM can execute them. Every call goes to the oracle contract at call time;
/// nothing is cached between claims.
#[multiversx_sc::module]
pub trait OracleModule {
    fn proposal_snapshot(&self, proposal_id: u64) -> ProposalSnapshot<Self::Api> {
        self.tx()
            .to(self.governance_address().get())
            .typed(GovernanceProxy)
            .get_proposal_for_rewards(proposal_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn proposal_client_id(&self, proposal_id: u64) -> u32 {
        self.tx()
            .to(self.governance_address().get())
            .typed(GovernanceProxy)
            .get_proposal_client_id(proposal_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn vote_client_data(&self, proposal_id: u64, client_id: u32) -> VoteClientData<Self::Api> {
        self.tx()
            .to(self.governance_address().get())
            .typed(GovernanceProxy)
            .get_vote_client_data(proposal_id, client_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn proposal_execution_state(&self, proposal_id: u64) -> ProposalState {
        self.tx()
            .to(self.governance_address().get())
            .typed(GovernanceProxy)
            .get_proposal_state(proposal_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn current_auction_noun_id(&self) -> u64 {
        self.tx()
            .to(self.auction_address().get())
            .typed(AuctionProxy)
            .get_current_noun_id()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn bidding_client(&self, noun_id: u64) -> u32 {
        self.tx()
            .to(self.auction_address().get())
            .typed(AuctionProxy)
            .get_bidding_client(noun_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getOracles)]
    fn get_oracles(&self) -> MultiValue2<ManagedAddress, ManagedAddress> {
        (self.governance_address().get(), self.auction_address().get()).into()
    }

    #[storage_mapper("governanceAddress")]
    fn governance_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("auctionAddress")]
    fn auction_address(&self) -> SingleValueMapper<ManagedAddress>;
}
