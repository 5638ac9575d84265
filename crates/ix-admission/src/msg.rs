//! The vehicle↔intersection message contract.
//!
//! Logical messages, not bytes on a wire: the surrounding framework delivers
//! them however it likes.  All types are transient — only the reservation
//! ledger persists grants.

use ix_core::{LaneId, RequestId, Vin};

/// One candidate crossing a vehicle offers: when it would arrive, how fast,
/// and on which lanes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proposal {
    /// Simulated time the vehicle would reach the intersection entry.
    pub arrival_time: f64,
    /// Velocity at arrival, m/s.
    pub arrival_velocity: f64,
    pub arrival_lane: LaneId,
    pub departure_lane: LaneId,
}

/// A vehicle's crossing request: an ordered list of proposals.
///
/// Order is meaningful — the ledger tries proposals exactly in the order
/// given, so the vehicle's preference is the tie-break.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub vin: Vin,
    pub request_id: RequestId,
    pub proposals: Vec<Proposal>,
}

/// The concrete grant: the accepted proposal plus the terms the ledger
/// committed to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReserveParam {
    pub vin: Vin,
    /// The proposal the grant was derived from.
    pub proposal: Proposal,
    /// Simulated time by which the vehicle will have left the intersection.
    pub exit_time: f64,
    /// Velocity the vehicle is expected to exit with, m/s.
    pub exit_velocity: f64,
}

/// Positive resolution of a request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Confirm {
    pub request_id: RequestId,
    pub reserve_param: ReserveParam,
}

/// Why a request was turned down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// Proposals survived the filter but none could be granted.
    NoClearPath,
    /// Every proposal's arrival time had already passed.
    ArrivalTimeTooLate,
    /// Every surviving proposal's arrival velocity was structurally
    /// infeasible.
    ArrivalVelocityInfeasible,
    /// The request carried no proposals at all.
    NoProposals,
}

/// Negative resolution of a request.  The vehicle must re-request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reject {
    pub vin: Vin,
    pub request_id: RequestId,
    pub reason: RejectReason,
}
