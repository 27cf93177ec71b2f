multiversx_sc::imports!();

use crate::errors::ERR_ALREADY_PAID;
use crate::types::RewardKind;

/// Paid flags per `(event_id, kind)` bucket. A flag is only ever set, never
/// cleared; a failed claim reverts it together with the rest of the call.
#[multiversx_sc::module]
pub trait PaymentLedgerModule {
    fn try_mark_paid(&self, event_id: u64, kind: &RewardKind) {
        let paid = self.paid(event_id, kind);
        require!(!paid.get(), ERR_ALREADY_PAID);
        if let Some(sibling) = kind.sibling() {
            require!(!self.paid(event_id, &sibling).get(), ERR_ALREADY_PAID);
        }
        paid.set(true);
    }

    #[view(isPaid)]
    fn is_paid(&self, event_id: u64, kind: RewardKind) -> bool {
        self.paid(event_id, &kind).get()
    }

    #[storage_mapper("paid")]
    fn paid(&self, event_id: u64, kind: &RewardKind) -> SingleValueMapper<bool>;
}
