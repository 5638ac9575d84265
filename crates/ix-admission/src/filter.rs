//! The standard proposal filter applied to every incoming request.

use ix_core::LaneId;

use crate::{Proposal, RejectReason};

/// The survivors of a filter pass, plus the reject reason when none survive.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterResult {
    pub proposals: Vec<Proposal>,
    /// `Some` exactly when `proposals` is empty.
    pub reason: Option<RejectReason>,
}

impl FilterResult {
    #[inline]
    pub fn no_proposal_left(&self) -> bool {
        self.proposals.is_empty()
    }
}

/// Drop proposals a reservation attempt could never honor.
///
/// Two stages, each supplying the reject reason if it empties the list:
///
/// 1. arrival times already in the past relative to `now`;
/// 2. structural infeasibility — a non-finite or non-positive arrival
///    velocity, or an unset arrival/departure lane.
///
/// An empty incoming list is itself inadmissible ([`RejectReason::NoProposals`]).
/// Surviving proposals keep their original order; the caller's preference
/// remains the tie-break downstream.
pub fn standard_filter(proposals: &[Proposal], now: f64) -> FilterResult {
    if proposals.is_empty() {
        return FilterResult {
            proposals: vec![],
            reason: Some(RejectReason::NoProposals),
        };
    }

    let on_time: Vec<Proposal> = proposals
        .iter()
        .filter(|p| p.arrival_time >= now)
        .cloned()
        .collect();
    if on_time.is_empty() {
        return FilterResult {
            proposals: vec![],
            reason: Some(RejectReason::ArrivalTimeTooLate),
        };
    }

    let feasible: Vec<Proposal> = on_time
        .into_iter()
        .filter(|p| {
            p.arrival_velocity.is_finite()
                && p.arrival_velocity > 0.0
                && p.arrival_lane != LaneId::INVALID
                && p.departure_lane != LaneId::INVALID
        })
        .collect();
    if feasible.is_empty() {
        return FilterResult {
            proposals: vec![],
            reason: Some(RejectReason::ArrivalVelocityInfeasible),
        };
    }

    FilterResult { proposals: feasible, reason: None }
}
