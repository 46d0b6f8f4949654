//! Simulation time model.
//!
//! # Design
//!
//! The model runs under two coupled time representations:
//!
//! - [`Tick`] — an integer counter driving the fixed-step main loop.  Tick
//!   `k` corresponds to simulated time `k * step`, computed by multiplication
//!   rather than repeated addition so tick boundaries land on exact multiples
//!   of `step` with no floating-point drift.
//! - [`SimTime`] — a continuous `f64` timestamp.  Recharge holds are not
//!   required to be a multiple of the tick step, so their completion events
//!   fall strictly between tick boundaries; `SimTime` carries those due
//!   times through the event queue.
//!
//! `SimTime` implements `Ord` via `f64::total_cmp`.  The invariant making
//! that sound: every `SimTime` in the system is produced from validated,
//! finite configuration values (`step > 0`, finite hold duration), so NaN
//! never enters the ordering.

use std::cmp::Ordering;
use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at one tick per simulated second a `u64` outlasts any
/// conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimTime ──────────────────────────────────────────────────────────────────

/// A continuous simulated timestamp, in the same unit as the tick step.
///
/// Total ordering comes from `f64::total_cmp`; see the module docs for the
/// no-NaN invariant that keeps heap ordering well defined.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);
}

impl PartialEq for SimTime {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}", self.0)
    }
}

// ── SimClock ─────────────────────────────────────────────────────────────────

/// Converts between the tick counter and continuous simulated time.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated duration of one tick.  Always positive (config-validated).
    pub step: f64,
    /// The current tick — advanced by [`SimClock::advance`] each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given step size.
    pub fn new(step: f64) -> Self {
        Self { step, current_tick: Tick::ZERO }
    }

    /// Continuous time of the current tick boundary.
    ///
    /// Computed as `tick * step` so boundaries stay exact regardless of how
    /// many ticks have elapsed.
    #[inline]
    pub fn now(&self) -> SimTime {
        SimTime(self.current_tick.0 as f64 * self.step)
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.now())
    }
}
