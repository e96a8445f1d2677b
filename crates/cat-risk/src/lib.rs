//! # cat-risk
//!
//! Catastrophe-risk simulators producing loss paths for catastrophe bond
//! Monte Carlo engines.
//!
//! A [`CatRisk`] model spawns a [`CatSimulation`] bound to a reference
//! window `[start, end]`; each call to [`CatSimulation::next_path`] fills a
//! caller-owned buffer with one time-ordered path of `(date, loss)` events.
//!
//! - [`EventSet`] replays a historical event set, one calendar-aligned
//!   sub-period per path, until the history is exhausted.
//! - [`BetaRisk`] draws Poisson event arrivals with Beta-distributed
//!   severities scaled by a maximum loss, and never exhausts.
//!
//! ```
//! use cat_risk::{CatRisk, CatSimulation, EventSet};
//! use cat_time::Date;
//!
//! let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
//! let history = vec![(d(2001, 7, 4), 50.0)];
//! let model = EventSet::new(history, d(2000, 1, 1), d(2002, 12, 31)).unwrap();
//!
//! let mut sim = model.new_simulation(d(2010, 1, 1), d(2010, 12, 31)).unwrap();
//! let mut path = Vec::new();
//! let mut paths = 0;
//! while sim.next_path(&mut path).unwrap() {
//!     paths += 1;
//! }
//! assert_eq!(paths, 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Beta-frequency parametric loss model.
pub mod beta_risk;

/// `CatRisk` / `CatSimulation` traits and the event type.
pub mod cat_risk;

/// Serializable model configuration.
pub mod config;

/// Historical event-set resampler.
pub mod event_set;

/// Incremental aggregation of simulated paths.
pub mod path_statistics;

pub use beta_risk::{BetaRisk, BetaRiskSimulation};
pub use cat_risk::{CatEvent, CatRisk, CatSimulation};
pub use config::{BetaRiskConfig, CatRiskConfig, EventSetConfig, HistoricalEvent};
pub use event_set::{EventSet, EventSetSimulation};
pub use path_statistics::{aggregate_paths, PathStatistics};
