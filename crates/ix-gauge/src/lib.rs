//! `ix-gauge` — bounded scalar sensor value stores.
//!
//! Every sensor reading in the framework lands in a [`Gauge`]: a scalar
//! clamped to `[min_value, max_value]`, optionally perturbed by a
//! [`NoiseFn`], and — in the smoothed variant — rate-limited through a
//! rolling history so a single wild reading cannot yank the stored value.
//!
//! # Crate layout
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`noise`] | `NoiseFn` — per-gauge noise transforms      |
//! | [`gauge`] | `Gauge` — plain and smoothed variants       |
//!
//! Recording never fails and never panics: out-of-delta readings are
//! silently rejected (and eventually trigger a history reset), out-of-range
//! values are clamped.

pub mod gauge;
pub mod noise;


pub use gauge::{Gauge, DEFAULT_DELTA, DEFAULT_RESET_LIMIT, HISTORY_LEN};
pub use noise::NoiseFn;
