use multiversx_sc::proxy_imports::*;

use crate::{ProposalSnapshot, ProposalState};

pub struct OracleMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for OracleMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = OracleMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        OracleMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct OracleMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> OracleMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> OracleMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_proposal<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<ProposalSnapshot<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        client_id: Arg1,
        snapshot: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setProposal")
            .argument(&proposal_id)
            .argument(&client_id)
            .argument(&snapshot)
            .original_result()
    }

    pub fn set_proposal_state<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ProposalState>>(
        self,
        proposal_id: Arg0,
        state: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setProposalState")
            .argument(&proposal_id)
            .argument(&state)
            .original_result()
    }

    pub fn set_vote_client_votes<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u32>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        client_id: Arg1,
        votes: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setVoteClientVotes")
            .argument(&proposal_id)
            .argument(&client_id)
            .argument(&votes)
            .original_result()
    }

    pub fn set_current_noun_id<Arg0: ProxyArg<u64>>(
        self,
        noun_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setCurrentNounId")
            .argument(&noun_id)
            .original_result()
    }

    pub fn set_bidding_client<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u32>>(
        self,
        noun_id: Arg0,
        client_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setBiddingClient")
            .argument(&noun_id)
            .argument(&client_id)
            .original_result()
    }
}
