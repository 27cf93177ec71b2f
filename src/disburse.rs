multiversx_sc::imports!();

use crate::client_registry;
use crate::errors::*;
use crate::types::RewardKind;

#[multiversx_sc::module]
pub trait DisburseModule: client_registry::ClientRegistryModule {
    /// Sends `amount` EGLD from the reward pool to the client's registered
    /// wallet. Must run after the bucket is marked paid.
    fn pay(&self, client_id: u32, amount: &BigUint, event_id: u64, kind: &RewardKind) {
        let destination = self.resolve(client_id);
        require!(*amount > 0u64, ERR_NOTHING_TO_PAY);

        let pool = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(pool >= *amount, ERR_TRANSFER_FAILED);

        self.total_paid().update(|total| *total += amount);
        self.total_paid_to_client(client_id)
            .update(|total| *total += amount);

        self.send().direct_egld(&destination, amount);
        self.reward_paid_event(client_id, &destination, kind, event_id, amount);
    }

    #[view(getTotalPaid)]
    fn get_total_paid(&self) -> BigUint {
        self.total_paid().get()
    }

    #[view(getTotalPaidToClient)]
    fn get_total_paid_to_client(&self, client_id: u32) -> BigUint {
        self.total_paid_to_client(client_id).get()
    }

    #[event("rewardPaid")]
    fn reward_paid_event(
        &self,
        #[indexed] client_id: u32,
        #[indexed] destination: &ManagedAddress,
        #[indexed] kind: &RewardKind,
        #[indexed] event_id: u64,
        amount: &BigUint,
    );

    #[storage_mapper("totalPaid")]
    fn total_paid(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalPaidToClient")]
    fn total_paid_to_client(&self, client_id: u32) -> SingleValueMapper<BigUint>;
}
