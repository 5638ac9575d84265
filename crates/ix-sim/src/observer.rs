//! Simulation observer trait for progress reporting and data collection.

use ix_admission::Resolution;
use ix_core::{Tick, Vin};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is the seam where statistics
/// writers, progress printers, and visualizers attach — the core never reads
/// an observer back.
///
/// # Example — collision counter
///
/// ```rust,ignore
/// struct CollisionCounter(usize);
///
/// impl SimObserver for CollisionCounter {
///     fn on_collision(&mut self, _a: Vin, _b: Vin, _tick: Tick) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the surviving vehicle count.
    fn on_tick_end(&mut self, _tick: Tick, _vehicle_count: usize) {}

    /// A vehicle entered the mapped area.
    fn on_spawn(&mut self, _vin: Vin, _tick: Tick) {}

    /// A vehicle left the mapped area and was retired.
    fn on_exit(&mut self, _vin: Vin, _tick: Tick) {}

    /// Two vehicles' bodies overlapped for the first time (for at least one
    /// of the pair — each vehicle latches at most once).
    fn on_collision(&mut self, _a: Vin, _b: Vin, _tick: Tick) {}

    /// A crossing request was resolved this tick.
    fn on_admission(&mut self, _resolution: &Resolution) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
