//! Reward calculation.
//!
//! Everything here is a pure function of oracle data, block height and the
//! configured reward params. Nothing touches storage, so the contract can run
//! these after the ledger mark and the whole call still reverts on failure.

multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{ProposalSnapshot, ProposalState, RewardKind, RewardParams, VoteClientData};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RewardError {
    NotEligible,
    AuctionNotConcluded,
    DivisionByZero,
    WrongOrder,
    DuplicateClient,
    IncompleteClientSet,
}

impl RewardError {
    pub fn message(self) -> &'static str {
        match self {
            RewardError::NotEligible => ERR_NOT_ELIGIBLE,
            RewardError::AuctionNotConcluded => ERR_AUCTION_NOT_CONCLUDED,
            RewardError::DivisionByZero => ERR_DIVISION_BY_ZERO,
            RewardError::WrongOrder => ERR_WRONG_ORDER,
            RewardError::DuplicateClient => ERR_DUPLICATE_CLIENT,
            RewardError::IncompleteClientSet => ERR_INCOMPLETE_CLIENT_SET,
        }
    }
}

/// Quorum reached, voting closed and the update window elapsed.
/// Both block bounds are exclusive.
pub fn require_eligible<M: ManagedTypeApi>(
    snapshot: &ProposalSnapshot<M>,
    current_block: u64,
) -> Result<(), RewardError> {
    if snapshot.for_votes < snapshot.quorum_votes {
        return Err(RewardError::NotEligible);
    }
    if current_block <= snapshot.end_block || current_block <= snapshot.update_period_end_block {
        return Err(RewardError::NotEligible);
    }
    Ok(())
}

pub fn proposal_creation_kind<M: ManagedTypeApi>(snapshot: &ProposalSnapshot<M>) -> RewardKind {
    if snapshot.signer_count > 0 {
        RewardKind::ProposalCreationBySignature
    } else {
        RewardKind::ProposalCreation
    }
}

pub fn proposal_creation_reward<M: ManagedTypeApi>(
    snapshot: &ProposalSnapshot<M>,
    params: &RewardParams<M>,
    current_block: u64,
) -> Result<BigUint<M>, RewardError> {
    require_eligible(snapshot, current_block)?;

    match proposal_creation_kind(snapshot) {
        RewardKind::ProposalCreationBySignature => Ok(params.proposal_by_sigs_creation.clone()),
        _ => Ok(params.proposal_creation.clone()),
    }
}

/// The auction for `noun_id` is settled once a later noun is on auction.
pub fn auction_bidding_reward<M: ManagedTypeApi>(
    noun_id: u64,
    current_noun_id: u64,
    params: &RewardParams<M>,
) -> Result<BigUint<M>, RewardError> {
    if current_noun_id <= noun_id {
        return Err(RewardError::AuctionNotConcluded);
    }
    Ok(params.auction_bidding.clone())
}

/// `proposal_voting * client_votes / total_votes`, truncated.
pub fn proportional_voting_reward<M: ManagedTypeApi>(
    snapshot: &ProposalSnapshot<M>,
    client_votes: &BigUint<M>,
    params: &RewardParams<M>,
    current_block: u64,
) -> Result<BigUint<M>, RewardError> {
    require_eligible(snapshot, current_block)?;

    let total_votes = snapshot.total_votes();
    if total_votes == 0u64 {
        return Err(RewardError::DivisionByZero);
    }
    Ok((&params.proposal_voting * client_votes) / &total_votes)
}

/// Validates a client ranking and returns the first-place client.
///
/// `ranked` must list every client that voted on the proposal, by
/// non-increasing vote count, each client once, with votes summing to the
/// proposal total. Leaders with equal votes are not re-ordered: the first one
/// listed takes the bonus.
pub fn first_place_client<M: ManagedTypeApi>(
    state: ProposalState,
    ranked: &ManagedVec<M, VoteClientData<M>>,
    total_votes: &BigUint<M>,
) -> Result<u32, RewardError> {
    if state != ProposalState::Executed {
        return Err(RewardError::NotEligible);
    }
    if ranked.is_empty() {
        return Err(RewardError::IncompleteClientSet);
    }

    let mut seen = ManagedMap::<M>::new();
    let present = ManagedBuffer::<M>::new_from_bytes(&[1u8]);

    let mut sum = BigUint::zero();
    let mut previous_votes: Option<BigUint<M>> = None;
    for entry in ranked.iter() {
        if let Some(previous) = &previous_votes {
            if entry.votes > *previous {
                return Err(RewardError::WrongOrder);
            }
        }
        let key = ManagedBuffer::<M>::new_from_bytes(&entry.client_id.to_be_bytes());
        if seen.contains(&key) {
            return Err(RewardError::DuplicateClient);
        }
        seen.put(&key, &present);
        sum += &entry.votes;
        previous_votes = Some(entry.votes.clone());
    }

    if sum != *total_votes {
        return Err(RewardError::IncompleteClientSet);
    }
    Ok(ranked.get(0).client_id)
}
