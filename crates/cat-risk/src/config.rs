//! Serializable model configuration.
//!
//! Hosts load model parameters from JSON, TOML, or any other `serde`
//! format and turn them into validated models:
//!
//! ```
//! use cat_risk::CatRiskConfig;
//!
//! let json = r#"{
//!     "model": "beta_risk",
//!     "max_loss": 1000.0, "years": 10.0, "mean": 1.0, "std_dev": 0.01
//! }"#;
//! let config: CatRiskConfig = serde_json::from_str(json).unwrap();
//! assert!(config.build().is_ok());
//! ```

use std::sync::Arc;

use cat_core::{Real, Result};
use cat_time::{Date, DayCountConvention};
use serde::{Deserialize, Serialize};

use crate::beta_risk::BetaRisk;
use crate::cat_risk::{CatEvent, CatRisk};
use crate::event_set::EventSet;

/// Parameters of a [`BetaRisk`] model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetaRiskConfig {
    /// Maximum loss per event.
    pub max_loss: Real,
    /// Expected years between events.
    pub years: Real,
    /// Expected loss per event.
    pub mean: Real,
    /// Standard deviation of the loss.
    pub std_dev: Real,
    /// Convention measuring reference-window lengths.
    #[serde(default)]
    pub day_counter: DayCountConvention,
}

/// A single recorded historical event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    /// Day the loss occurred.
    pub date: Date,
    /// Loss amount.
    pub loss: Real,
}

/// Parameters of an [`EventSet`] model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSetConfig {
    /// Historical events in date order.
    pub events: Vec<HistoricalEvent>,
    /// First day of the historical record.
    pub start: Date,
    /// Last day of the historical record.
    pub end: Date,
}

/// Either model, tagged by a `model` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum CatRiskConfig {
    /// Historical event-set resampler.
    EventSet(EventSetConfig),
    /// Beta-frequency parametric model.
    BetaRisk(BetaRiskConfig),
}

impl BetaRisk {
    /// Build a model from its configuration.
    pub fn from_config(config: &BetaRiskConfig) -> Result<Self> {
        Ok(
            Self::new(config.max_loss, config.years, config.mean, config.std_dev)?
                .with_day_counter(config.day_counter),
        )
    }
}

impl EventSet {
    /// Build a model from its configuration.
    pub fn from_config(config: &EventSetConfig) -> Result<Self> {
        let events: Arc<[CatEvent]> = config.events.iter().map(|e| (e.date, e.loss)).collect();
        Self::new(events, config.start, config.end)
    }
}

impl CatRiskConfig {
    /// Build the configured model.
    pub fn build(&self) -> Result<Box<dyn CatRisk>> {
        Ok(match self {
            CatRiskConfig::EventSet(c) => Box::new(EventSet::from_config(c)?),
            CatRiskConfig::BetaRisk(c) => Box::new(BetaRisk::from_config(c)?),
        })
    }
}
