use multiversx_sc::proxy_imports::*;

use crate::types::{ProposalSnapshot, ProposalState, VoteClientData};

pub struct GovernanceProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for GovernanceProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = GovernanceProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        GovernanceProxyMethods { wrapped_tx: tx }
    }
}

pub struct GovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> GovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_proposal_for_rewards<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalSnapshot<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalForRewards")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal_client_id<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalClientId")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_vote_client_data<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u32>>(
        self,
        proposal_id: Arg0,
        client_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, VoteClientData<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoteClientData")
            .argument(&proposal_id)
            .argument(&client_id)
            .original_result()
    }

    pub fn get_proposal_state<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalState")
            .argument(&proposal_id)
            .original_result()
    }
}
