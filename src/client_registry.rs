multiversx_sc::imports!();

use crate::errors::*;
use crate::types::NO_CLIENT;

/// Write-once mapping from client id to payout wallet.
///
/// There is no update or removal path: once rewards may be owed to a client,
/// nobody can redirect them.
#[multiversx_sc::module]
pub trait ClientRegistryModule {
    fn register(&self, client_id: u32, payout_destination: &ManagedAddress) {
        require!(client_id != NO_CLIENT, ERR_INVALID_CLIENT_ID);
        require!(!payout_destination.is_zero(), ERR_ZERO_ADDRESS);
        require!(
            self.client_wallet(client_id).is_empty(),
            ERR_ALREADY_REGISTERED
        );

        self.client_wallet(client_id).set(payout_destination);

        let registrant = self.blockchain().get_caller();
        self.client_registered_event(client_id, payout_destination, &registrant);
    }

    fn resolve(&self, client_id: u32) -> ManagedAddress {
        require!(!self.client_wallet(client_id).is_empty(), ERR_UNKNOWN_CLIENT);
        self.client_wallet(client_id).get()
    }

    #[view(getClientWallet)]
    fn get_client_wallet(&self, client_id: u32) -> OptionalValue<ManagedAddress> {
        if self.client_wallet(client_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.client_wallet(client_id).get())
        }
    }

    #[event("clientRegistered")]
    fn client_registered_event(
        &self,
        #[indexed] client_id: u32,
        #[indexed] payout_destination: &ManagedAddress,
        registrant: &ManagedAddress,
    );

    #[storage_mapper("clientWallet")]
    fn client_wallet(&self, client_id: u32) -> SingleValueMapper<ManagedAddress>;
}
