#![allow(clippy::too_many_arguments)]

use multiversx_sc::proxy_imports::*;

use crate::types::{RewardKind, RewardParams};

pub struct ClientRewardsProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ClientRewardsProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ClientRewardsProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ClientRewardsProxyMethods { wrapped_tx: tx }
    }
}

pub struct ClientRewardsProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ClientRewardsProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        governance_address: Arg0,
        auction_address: Arg1,
        proposal_creation: Arg2,
        proposal_by_sigs_creation: Arg3,
        auction_bidding: Arg4,
        proposal_voting: Arg5,
        voting_first_place: Arg6,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&governance_address)
            .argument(&auction_address)
            .argument(&proposal_creation)
            .argument(&proposal_by_sigs_creation)
            .argument(&auction_bidding)
            .argument(&proposal_voting)
            .argument(&voting_first_place)
            .original_result()
    }
}

impl<Env, From, To, Gas> ClientRewardsProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> ClientRewardsProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn register_client<Arg0: ProxyArg<u32>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        client_id: Arg0,
        payout_destination: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerClient")
            .argument(&client_id)
            .argument(&payout_destination)
            .original_result()
    }

    pub fn fund(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("fund").original_result()
    }

    pub fn claim_proposal_creation_reward<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimProposalCreationReward")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn claim_auction_bidding_reward<Arg0: ProxyArg<u64>>(
        self,
        noun_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimAuctionBiddingReward")
            .argument(&noun_id)
            .original_result()
    }

    pub fn claim_proportional_voting_reward<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u32>>(
        self,
        proposal_id: Arg0,
        client_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimProportionalVotingReward")
            .argument(&proposal_id)
            .argument(&client_id)
            .original_result()
    }

    pub fn claim_voting_bonus_reward<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, u32>>,
    >(
        self,
        proposal_id: Arg0,
        ordered_client_ids: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimVotingBonusReward")
            .argument(&proposal_id)
            .argument(&ordered_client_ids)
            .original_result()
    }

    pub fn set_reward_params<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        proposal_creation: Arg0,
        proposal_by_sigs_creation: Arg1,
        auction_bidding: Arg2,
        proposal_voting: Arg3,
        voting_first_place: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRewardParams")
            .argument(&proposal_creation)
            .argument(&proposal_by_sigs_creation)
            .argument(&auction_bidding)
            .argument(&proposal_voting)
            .argument(&voting_first_place)
            .original_result()
    }

    pub fn set_oracles<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        governance_address: Arg0,
        auction_address: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setOracles")
            .argument(&governance_address)
            .argument(&auction_address)
            .original_result()
    }

    pub fn set_paused<Arg0: ProxyArg<bool>>(
        self,
        paused: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPaused")
            .argument(&paused)
            .original_result()
    }

    pub fn set_owner<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setOwner")
            .argument(&new_owner)
            .original_result()
    }

    pub fn get_reward_params(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, RewardParams<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRewardParams")
            .original_result()
    }

    pub fn get_reward_pool(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRewardPool")
            .original_result()
    }

    pub fn get_owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwner")
            .original_result()
    }

    pub fn is_paused(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isPaused")
            .original_result()
    }

    pub fn get_voting_pool<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingPool")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_client_wallet<Arg0: ProxyArg<u32>>(
        self,
        client_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClientWallet")
            .argument(&client_id)
            .original_result()
    }

    pub fn get_oracles(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue2<ManagedAddress<Env::Api>, ManagedAddress<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOracles")
            .original_result()
    }

    pub fn is_paid<Arg0: ProxyArg<u64>, Arg1: ProxyArg<RewardKind>>(
        self,
        event_id: Arg0,
        kind: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isPaid")
            .argument(&event_id)
            .argument(&kind)
            .original_result()
    }

    pub fn get_total_paid(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalPaid")
            .original_result()
    }

    pub fn get_total_paid_to_client<Arg0: ProxyArg<u32>>(
        self,
        client_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalPaidToClient")
            .argument(&client_id)
            .original_result()
    }
}
