//! Catastrophe risk abstractions.
//!
//! A [`CatRisk`] is an immutable model; a [`CatSimulation`] is the mutable
//! pull-style generator it spawns for one reference window.

use cat_core::{ensure, Real, Result};
use cat_time::Date;

// ── Types ────────────────────────────────────────────────────────────────────

/// A single catastrophe event: (date, loss amount).
pub type CatEvent = (Date, Real);

// ── Traits ───────────────────────────────────────────────────────────────────

/// A generator of catastrophe event paths over a fixed reference window.
pub trait CatSimulation: Send {
    /// First day of the reference window.
    fn start(&self) -> Date;

    /// Last day of the reference window.
    fn end(&self) -> Date;

    /// Clear `path` and fill it with the next path of events, in
    /// non-decreasing date order within `[start, end]`.
    ///
    /// Returns `Ok(false)`, leaving `path` empty, once the simulation is
    /// permanently exhausted.
    fn next_path(&mut self, path: &mut Vec<CatEvent>) -> Result<bool>;
}

/// A catastrophe risk model that can create simulations over arbitrary
/// reference windows.
pub trait CatRisk: Send + Sync {
    /// Create a new simulation over `[start, end]`.
    ///
    /// # Errors
    /// `InvalidInput` if `end < start`.
    fn new_simulation(&self, start: Date, end: Date) -> Result<Box<dyn CatSimulation>>;
}

// ── Helpers ──────────────────────────────────────────────────────────────────

pub(crate) fn check_window(start: Date, end: Date) -> Result<()> {
    ensure!(
        start <= end,
        "reference window end {end} precedes its start {start}"
    );
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────────
