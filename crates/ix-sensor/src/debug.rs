//! Optional geometric debug annotations for one watched vehicle.

use ix_core::{Point2, Vin};

/// Receives debug geometry for the designated watched vehicle.
///
/// Purely observational — nothing in the core ever reads a sink back.  All
/// methods have no-op defaults so implementors only override what they draw.
pub trait DebugSink {
    /// The lane segment currently treated as the watched vehicle's following
    /// gap, from the rear neighbor's position to the front neighbor's.
    fn following_gap(&mut self, _vin: Vin, _rear: Point2, _front: Point2) {}
}

/// A [`DebugSink`] that discards everything.
pub struct NoopDebugSink;

impl DebugSink for NoopDebugSink {}
