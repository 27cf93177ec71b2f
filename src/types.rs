multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Client id reported by governance and auction for actions that were not
/// routed through any registered integrator.
pub const NO_CLIENT: u32 = 0;

// ============================================================
// Reward Kind: second half of a ledger bucket key
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum RewardKind {
    /// Flat reward for a proposal submitted without co-signers.
    ProposalCreation,
    /// Flat reward for a proposal submitted with one or more co-signers.
    ProposalCreationBySignature,
    /// Flat reward for the client that placed the winning bid of a noun.
    AuctionBidding,
    /// Vote-weighted share of the voting pool, one bucket per client.
    ProportionalVoting(u32),
    /// First-place bonus for the client with the most votes.
    VotingWithBonus,
}

impl RewardKind {
    /// The other bucket that settles the same event, if any. A proposal earns
    /// one creation reward, whichever signer count governance reports.
    pub fn sibling(&self) -> Option<RewardKind> {
        match self {
            RewardKind::ProposalCreation => Some(RewardKind::ProposalCreationBySignature),
            RewardKind::ProposalCreationBySignature => Some(RewardKind::ProposalCreation),
            _ => None,
        }
    }
}

// ============================================================
// Proposal State: as reported by the governance contract
// ============================================================

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

// ============================================================
// Proposal Snapshot: governance data needed for eligibility
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalSnapshot<M: ManagedTypeApi> {
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub abstain_votes: BigUint<M>,
    pub quorum_votes: BigUint<M>,
    pub end_block: u64,
    /// Last block of the window in which the proposer may still edit the proposal
    pub update_period_end_block: u64,
    pub executed: bool,
    pub signer_count: u32,
}

impl<M: ManagedTypeApi> ProposalSnapshot<M> {
    pub fn total_votes(&self) -> BigUint<M> {
        let mut total = &self.for_votes + &self.against_votes;
        total += &self.abstain_votes;
        total
    }
}

// ============================================================
// Vote Client Data: votes attributed to one client
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct VoteClientData<M: ManagedTypeApi> {
    pub client_id: u32,
    pub votes: BigUint<M>,
}

// ============================================================
// Reward Params: payout amounts in the smallest EGLD unit
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct RewardParams<M: ManagedTypeApi> {
    pub proposal_creation: BigUint<M>,
    pub proposal_by_sigs_creation: BigUint<M>,
    pub auction_bidding: BigUint<M>,
    /// Split across all clients of a proposal, proportional to their votes
    pub proposal_voting: BigUint<M>,
    pub voting_first_place: BigUint<M>,
}
