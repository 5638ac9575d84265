//! The reservation ledger — the one shared-mutation point across vehicles.

use ix_core::Vin;

use crate::{Proposal, Request, ReserveParam};

/// Clearance kept between one grant's exit and the next grant's entry,
/// seconds.
pub const EXIT_BUFFER_SECS: f64 = 0.1;

/// The authoritative record of granted space-time slots through the
/// intersection.
///
/// Within a tick, calls for different vehicles must be issued in a defined
/// order (request arrival order) — granting one proposal can invalidate the
/// feasibility of another vehicle's overlapping proposal.
pub trait ReservationLedger {
    /// The ledger's current simulated time, seconds.
    fn current_time(&self) -> f64;

    /// Inform the ledger that simulated time has advanced.
    ///
    /// Housekeeping hook with a no-op default; ledgers that track time use
    /// it to move their clock and expire vacated grants.
    fn advance_to(&mut self, _now: f64) {}

    /// Try `proposals` strictly in the order given and commit the first for
    /// which a conflict-free grant exists.
    ///
    /// Returns `None` when no proposal is grantable.  Committing is atomic
    /// with the successful check: once this returns `Some`, the slot is
    /// taken.
    fn find_reserve_param(
        &mut self,
        request: &Request,
        proposals: &[Proposal],
    ) -> Option<ReserveParam>;
}

// ── TimeWindowLedger ─────────────────────────────────────────────────────────

/// A ledger that grants non-overlapping time windows through the
/// intersection box.
///
/// A grant occupies `[arrival, exit + EXIT_BUFFER_SECS)`, with the exit time
/// estimated from the crossing distance and the proposal's arrival velocity.
/// Expired windows are pruned as the clock advances.
pub struct TimeWindowLedger {
    now: f64,
    /// Path length through the intersection, metres.
    crossing_distance: f64,
    /// Committed `(vin, enter, occupied_until)` windows.
    windows: Vec<(Vin, f64, f64)>,
}

impl TimeWindowLedger {
    pub fn new(crossing_distance: f64) -> Self {
        Self {
            now: 0.0,
            crossing_distance,
            windows: Vec::new(),
        }
    }

    /// Advance the ledger's clock and drop windows already vacated.
    pub fn set_time(&mut self, now: f64) {
        self.now = now;
        self.windows.retain(|&(_, _, until)| until >= now);
    }

    /// Number of currently committed windows.
    pub fn grant_count(&self) -> usize {
        self.windows.len()
    }

    fn crossing_secs(&self, velocity: f64) -> f64 {
        self.crossing_distance / velocity.max(1.0)
    }

    fn conflicts(&self, enter: f64, until: f64) -> bool {
        self.windows
            .iter()
            .any(|&(_, e, u)| enter < u && e < until)
    }
}

impl ReservationLedger for TimeWindowLedger {
    fn current_time(&self) -> f64 {
        self.now
    }

    fn advance_to(&mut self, now: f64) {
        self.set_time(now);
    }

    fn find_reserve_param(
        &mut self,
        request: &Request,
        proposals: &[Proposal],
    ) -> Option<ReserveParam> {
        for p in proposals {
            let enter = p.arrival_time;
            let exit = enter + self.crossing_secs(p.arrival_velocity);
            let until = exit + EXIT_BUFFER_SECS;
            if !self.conflicts(enter, until) {
                self.windows.push((request.vin, enter, until));
                return Some(ReserveParam {
                    vin: request.vin,
                    proposal: p.clone(),
                    exit_time: exit,
                    exit_velocity: p.arrival_velocity,
                });
            }
        }
        None
    }
}
