//! `ix-admission` — may this vehicle cross the intersection, and on what
//! time-space terms?
//!
//! A vehicle asking to cross sends a [`Request`] carrying an ordered list of
//! [`Proposal`]s.  Within the same tick the request is filtered, tried
//! against the reservation ledger, and resolved to either a [`Confirm`]
//! (carrying the granted [`ReserveParam`]) or a [`Reject`] with a reason
//! code.  Nothing about a request survives the tick — a rejected vehicle
//! must re-request.
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`msg`]     | `Request`, `Proposal`, `ReserveParam`, `Confirm`,   |
//! |             | `Reject`, `RejectReason`                            |
//! | [`filter`]  | the standard proposal filter                        |
//! | [`ledger`]  | `ReservationLedger` trait, `TimeWindowLedger`       |
//! | [`handler`] | `RequestHandler` trait, `NoStopHandler`             |
//!
//! Inadmissible requests are never errors: an empty or fully-filtered
//! proposal list resolves to a `Reject`, and `Err` does not appear in the
//! request path at all.

pub mod filter;
pub mod handler;
pub mod ledger;
pub mod msg;


pub use filter::{standard_filter, FilterResult};
pub use handler::{NoStopHandler, RequestHandler, Resolution};
pub use ledger::{ReservationLedger, TimeWindowLedger, EXIT_BUFFER_SECS};
pub use msg::{Confirm, Proposal, Reject, RejectReason, Request, ReserveParam};
