//! The `Gauge` type: a bounded, optionally smoothed scalar store.

use tracing::trace;

use crate::NoiseFn;

/// Number of past accepted readings the smoothed variant averages over.
pub const HISTORY_LEN: usize = 4;

/// Consecutive rejected readings before the rolling history is cleared.
pub const DEFAULT_RESET_LIMIT: u32 = 5;

/// Default per-reading change limit for smoothed gauges.
pub const DEFAULT_DELTA: f64 = 10.0;

// ── Smoothing state ──────────────────────────────────────────────────────────

/// Rolling-average state for the smoothed variant.
///
/// `primed == false` marks a blank ring: the next recorded reading seeds
/// every slot at once, putting the gauge back in a deterministic cold-start
/// state.
struct Smoothing {
    ring: [f64; HISTORY_LEN],
    primed: bool,
    /// Maximum amount the stored value may shift per accepted reading.
    delta: f64,
    /// Rejected readings since the last accepted one.
    invalid_count: u32,
    reset_limit: u32,
}

// ── Gauge ────────────────────────────────────────────────────────────────────

/// A bounded scalar sensor value store.
///
/// Two variants share the type:
///
/// - **plain** — every noised reading is clamped and stored directly
///   (delta is effectively infinite);
/// - **smoothed** — readings pass a prospective-moving-average gate before
///   being admitted to a fixed-length history ring.
///
/// The stored value is always within `[min_value, max_value]`; `record`
/// never panics regardless of the reading.
pub struct Gauge {
    value: f64,
    min_value: f64,
    max_value: f64,
    noise: NoiseFn,
    smoothing: Option<Smoothing>,
}

impl Gauge {
    /// A pass-through gauge: clamp-only, no rate limiting.
    pub fn plain(initial: f64, min_value: f64, max_value: f64) -> Self {
        Self::plain_with_noise(initial, min_value, max_value, NoiseFn::none())
    }

    /// A pass-through gauge with a noise transform.
    pub fn plain_with_noise(
        initial: f64,
        min_value: f64,
        max_value: f64,
        noise: NoiseFn,
    ) -> Self {
        Self {
            value: initial.clamp(min_value, max_value),
            min_value,
            max_value,
            noise,
            smoothing: None,
        }
    }

    /// A smoothed gauge with a blank history ring.
    ///
    /// `read()` returns `initial` until the first reading seeds the ring.
    pub fn smoothed(initial: f64, min_value: f64, max_value: f64, delta: f64) -> Self {
        Self::smoothed_with_noise(initial, min_value, max_value, delta, NoiseFn::none())
    }

    /// A smoothed gauge with a noise transform.
    pub fn smoothed_with_noise(
        initial: f64,
        min_value: f64,
        max_value: f64,
        delta: f64,
        noise: NoiseFn,
    ) -> Self {
        Self {
            value: initial.clamp(min_value, max_value),
            min_value,
            max_value,
            noise,
            smoothing: Some(Smoothing {
                ring: [0.0; HISTORY_LEN],
                primed: false,
                delta,
                invalid_count: 0,
                reset_limit: DEFAULT_RESET_LIMIT,
            }),
        }
    }

    /// Override the consecutive-rejection limit that clears the ring.
    pub fn with_reset_limit(mut self, reset_limit: u32) -> Self {
        if let Some(s) = &mut self.smoothing {
            s.reset_limit = reset_limit;
        }
        self
    }

    // ── Reading and recording ─────────────────────────────────────────────

    /// The current stored value.  No side effects.
    #[inline]
    pub fn read(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    #[inline]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Record one raw reading.
    ///
    /// The noise transform runs first.  Plain gauges then clamp and store.
    /// Smoothed gauges admit the reading only if the prospective moving
    /// average stays within `delta` of the current value; a rejected reading
    /// leaves the history untouched and counts toward the reset limit, and
    /// once the ring is cleared the next reading re-seeds every slot.
    pub fn record(&mut self, raw: f64) {
        let v = self.noise.apply(raw);

        let Some(s) = &mut self.smoothing else {
            self.value = v.clamp(self.min_value, self.max_value);
            return;
        };

        if !s.primed {
            s.ring = [v; HISTORY_LEN];
            s.primed = true;
            s.invalid_count = 0;
            self.value = v.clamp(self.min_value, self.max_value);
            return;
        }

        let sum: f64 = s.ring.iter().sum();
        let prospective = (sum + v) / (HISTORY_LEN as f64 + 1.0);
        if (prospective - self.value).abs() <= s.delta {
            s.ring.rotate_left(1);
            s.ring[HISTORY_LEN - 1] = v;
            self.value = prospective.clamp(self.min_value, self.max_value);
            s.invalid_count = 0;
        } else {
            trace!(prospective, current = self.value, "rejected gauge reading");
            s.invalid_count += 1;
            if s.invalid_count >= s.reset_limit {
                s.primed = false;
            }
        }
    }

    /// Clear the rolling history, forcing the next reading to re-seed.
    ///
    /// No-op on plain gauges.  The stored value is unchanged until the next
    /// reading arrives.
    pub fn clear(&mut self) {
        if let Some(s) = &mut self.smoothing {
            s.primed = false;
        }
    }
}
