//! # catbonds
//!
//! Catastrophe-risk simulators that generate stochastic loss paths for
//! catastrophe bond Monte Carlo pricing.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `cat-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use catbonds::risk::{BetaRisk, CatSimulation};
//! use catbonds::time::Date;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2027, 12, 31).unwrap();
//! let model = BetaRisk::new(1e9, 5.0, 1e7, 1e7).unwrap();
//!
//! let mut sim = model.seeded_simulation(start, end, 42).unwrap();
//! let mut path = Vec::new();
//! for _ in 0..100 {
//!     assert!(sim.next_path(&mut path).unwrap());
//!     assert!(path.iter().all(|&(d, loss)| start <= d && d <= end && loss <= 1e9));
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use cat_core as core;

/// Dates, periods, and day counters.
pub use cat_time as time;

/// Random number generation and statistics.
pub use cat_math as math;

/// Catastrophe risk models and simulations.
pub use cat_risk as risk;

/// Convenience prelude.
pub mod prelude {
    pub use cat_core::{Error, Real, Result};
    pub use cat_risk::{
        aggregate_paths, BetaRisk, CatEvent, CatRisk, CatRiskConfig, CatSimulation, EventSet,
        PathStatistics,
    };
    pub use cat_time::{Date, DayCountConvention};
}
