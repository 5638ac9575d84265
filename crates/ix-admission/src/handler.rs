//! Request handlers: the admission policy in front of the ledger.

use tracing::debug;

use crate::{standard_filter, Confirm, Reject, RejectReason, Request, ReservationLedger};

/// How one request was resolved, synchronously within its tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Confirmed(Confirm),
    Rejected(Reject),
}

/// An admission policy: receives crossing requests, answers with a
/// resolution.
///
/// `act` is a periodic housekeeping hook (e.g. expiring stale grants) with a
/// no-op default; policies that need none simply don't override it.
pub trait RequestHandler {
    /// Let the handler act for one time period of `time_step` seconds.
    fn act(&mut self, _time_step: f64) {}

    /// Resolve `msg` against `ledger`.  Never fails: malformed requests
    /// resolve to a [`Reject`].
    fn process_request(
        &mut self,
        msg: &Request,
        ledger: &mut dyn ReservationLedger,
    ) -> Resolution;
}

// ── NoStopHandler ────────────────────────────────────────────────────────────

/// The no-stop policy: filter, then grant the first conflict-free proposal.
///
/// Vehicles are never asked to stop and queue — a request either gets a
/// clear path now or is rejected so the vehicle can re-propose on a later
/// approach.
#[derive(Default)]
pub struct NoStopHandler;

impl RequestHandler for NoStopHandler {
    fn process_request(
        &mut self,
        msg: &Request,
        ledger: &mut dyn ReservationLedger,
    ) -> Resolution {
        let filtered = standard_filter(&msg.proposals, ledger.current_time());
        if let Some(reason) = filtered.reason {
            debug!(vin = %msg.vin, ?reason, "request rejected by filter");
            return Resolution::Rejected(Reject {
                vin: msg.vin,
                request_id: msg.request_id,
                reason,
            });
        }

        match ledger.find_reserve_param(msg, &filtered.proposals) {
            Some(reserve_param) => Resolution::Confirmed(Confirm {
                request_id: msg.request_id,
                reserve_param,
            }),
            None => {
                debug!(vin = %msg.vin, "no grantable proposal");
                Resolution::Rejected(Reject {
                    vin: msg.vin,
                    request_id: msg.request_id,
                    reason: RejectReason::NoClearPath,
                })
            }
        }
    }
}
