//! Beta-frequency parametric loss model.
//!
//! Events arrive as a Poisson process with rate `lambda = 1 / years` per
//! year; each event's severity is `max_loss · X / (X + Y)` with
//! `X ~ Gamma(alpha, 1)` and `Y ~ Gamma(beta, 1)`, i.e. a Beta(alpha, beta)
//! variate scaled by the maximum loss.

use cat_core::{ensure, ensure_numeric, Error, Real, Result, Time};
use cat_math::MersenneTwisterUniformRng;
use cat_time::{Date, DayCountConvention, DayCounter};
use rand_distr::{Distribution, Exp, Gamma};
use tracing::{debug, trace};

use crate::cat_risk::{check_window, CatEvent, CatRisk, CatSimulation};

// ── BetaRisk ─────────────────────────────────────────────────────────────────

/// Stochastic catastrophe risk model: Poisson arrival of events with
/// Beta-distributed loss severities.
#[derive(Debug, Clone, PartialEq)]
pub struct BetaRisk {
    max_loss: Real,
    lambda: Real,
    alpha: Real,
    beta: Real,
    day_counter: DayCountConvention,
}

impl BetaRisk {
    /// Create a Beta risk model.
    ///
    /// - `max_loss`: maximum possible loss per event
    /// - `years`: expected inter-arrival time in years (`lambda = 1 / years`)
    /// - `mean`: expected loss per event
    /// - `std_dev`: standard deviation of the loss per period
    ///
    /// The normalised moments are `m = mean / max_loss` and
    /// `v = (std_dev / max_loss)² · lambda`, giving
    /// `alpha = ((1 − m) / v − 1 / m) · m²` and `beta = alpha · (1 / m − 1)`.
    ///
    /// # Errors
    /// `InvalidInput` unless `max_loss > 0`, `years > 0`,
    /// `0 < mean < max_loss`, `std_dev > 0`, and the derived shape
    /// parameters are both positive.
    pub fn new(max_loss: Real, years: Real, mean: Real, std_dev: Real) -> Result<Self> {
        ensure!(
            max_loss.is_finite() && max_loss > 0.0,
            "max loss must be positive, got {max_loss}"
        );
        ensure!(
            years.is_finite() && years > 0.0,
            "mean inter-arrival time must be positive, got {years} years"
        );
        ensure!(
            mean > 0.0 && mean < max_loss,
            "mean {mean} of the loss distribution must lie in (0, {max_loss})"
        );
        ensure!(
            std_dev.is_finite() && std_dev > 0.0,
            "standard deviation must be positive, got {std_dev}"
        );

        let lambda = 1.0 / years;
        let m = mean / max_loss;
        let v = (std_dev / max_loss).powi(2) * lambda;
        let alpha = ((1.0 - m) / v - 1.0 / m) * m * m;
        let beta = alpha * (1.0 / m - 1.0);
        ensure!(
            alpha.is_finite() && alpha > 0.0 && beta.is_finite() && beta > 0.0,
            "standard deviation {std_dev} is impossible for a scaled Beta with mean {mean} \
             (alpha = {alpha}, beta = {beta})"
        );

        Ok(Self {
            max_loss,
            lambda,
            alpha,
            beta,
            day_counter: DayCountConvention::default(),
        })
    }

    /// Use `day_counter` to measure the length of reference windows.
    pub fn with_day_counter(mut self, day_counter: DayCountConvention) -> Self {
        self.day_counter = day_counter;
        self
    }

    /// Maximum loss per event.
    pub fn max_loss(&self) -> Real {
        self.max_loss
    }

    /// Expected number of events per year.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    /// First Beta shape parameter.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Second Beta shape parameter.
    pub fn beta(&self) -> Real {
        self.beta
    }

    /// Day-count convention used for window lengths.
    pub fn day_counter(&self) -> DayCountConvention {
        self.day_counter
    }

    /// Expected severity of a single event.
    pub fn expected_severity(&self) -> Real {
        self.max_loss * self.alpha / (self.alpha + self.beta)
    }

    /// Variance of the severity of a single event.
    pub fn severity_variance(&self) -> Real {
        let s = self.alpha + self.beta;
        self.max_loss * self.max_loss * self.alpha * self.beta / (s * s * (s + 1.0))
    }

    /// Create a simulation over `[start, end]` seeded from OS entropy.
    pub fn simulation(&self, start: Date, end: Date) -> Result<BetaRiskSimulation> {
        self.build(start, end, MersenneTwisterUniformRng::from_entropy())
    }

    /// Create a reproducible simulation over `[start, end]`: equal seeds and
    /// parameters yield identical path sequences.
    pub fn seeded_simulation(
        &self,
        start: Date,
        end: Date,
        seed: u64,
    ) -> Result<BetaRiskSimulation> {
        self.build(start, end, MersenneTwisterUniformRng::new(seed))
    }

    fn build(
        &self,
        start: Date,
        end: Date,
        rng: MersenneTwisterUniformRng,
    ) -> Result<BetaRiskSimulation> {
        BetaRiskSimulation::new(
            start,
            end,
            self.max_loss,
            self.lambda,
            self.alpha,
            self.beta,
            &self.day_counter,
            rng,
        )
    }
}

impl CatRisk for BetaRisk {
    fn new_simulation(&self, start: Date, end: Date) -> Result<Box<dyn CatSimulation>> {
        Ok(Box::new(self.simulation(start, end)?))
    }
}

// ── BetaRiskSimulation ───────────────────────────────────────────────────────

/// Monte Carlo simulation for the Beta risk model.
///
/// Owns its random state; successive paths continue the same stream.
#[derive(Debug)]
pub struct BetaRiskSimulation {
    start: Date,
    end: Date,
    max_loss: Real,
    day_count: i64,
    year_fraction: Time,
    rng: MersenneTwisterUniformRng,
    exponential: Exp<Real>,
    gamma_alpha: Gamma<Real>,
    gamma_beta: Gamma<Real>,
}

impl BetaRiskSimulation {
    /// Create a new beta-risk simulation.
    ///
    /// # Errors
    /// `InvalidInput` if `end < start`, if `max_loss` or `lambda` is not a
    /// positive finite number, or if a shape parameter is rejected by the
    /// gamma sampler.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start: Date,
        end: Date,
        max_loss: Real,
        lambda: Real,
        alpha: Real,
        beta: Real,
        day_counter: &dyn DayCounter,
        rng: MersenneTwisterUniformRng,
    ) -> Result<Self> {
        check_window(start, end)?;
        ensure!(
            max_loss.is_finite() && max_loss > 0.0,
            "max loss must be positive and finite, got {max_loss}"
        );
        ensure!(
            lambda.is_finite() && lambda > 0.0,
            "event rate must be positive and finite, got {lambda}"
        );
        let exponential = Exp::new(lambda).map_err(|e| Error::InvalidInput(e.to_string()))?;
        let gamma_alpha =
            Gamma::new(alpha, 1.0).map_err(|e| Error::InvalidInput(e.to_string()))?;
        let gamma_beta =
            Gamma::new(beta, 1.0).map_err(|e| Error::InvalidInput(e.to_string()))?;

        let day_count = day_counter.day_count(start, end);
        let year_fraction = day_counter.year_fraction(start, end);
        debug!(
            %start, %end, day_count, year_fraction, lambda, alpha, beta,
            seed = rng.seed(),
            day_counter = day_counter.name(),
            "beta-risk simulation created"
        );

        Ok(Self {
            start,
            end,
            max_loss,
            day_count,
            year_fraction,
            rng,
            exponential,
            gamma_alpha,
            gamma_beta,
        })
    }

    /// Length of the reference window in years.
    pub fn year_fraction(&self) -> Time {
        self.year_fraction
    }

    /// Draw one severity, `max_loss · X / (X + Y)`.
    ///
    /// # Errors
    /// `Numeric` if both gamma draws are zero.
    pub fn generate_beta(&mut self) -> Result<Real> {
        let x: Real = self.gamma_alpha.sample(&mut self.rng);
        let y: Real = self.gamma_beta.sample(&mut self.rng);
        scaled_beta(x, y, self.max_loss)
    }
}

/// `max_loss · x / (x + y)` for gamma draws `x` and `y`.
fn scaled_beta(x: Real, y: Real, max_loss: Real) -> Result<Real> {
    let sum = x + y;
    ensure_numeric!(
        sum > 0.0 && sum.is_finite(),
        "degenerate gamma draws {x} and {y}"
    );
    Ok(max_loss * x / sum)
}

impl CatSimulation for BetaRiskSimulation {
    fn start(&self) -> Date {
        self.start
    }

    fn end(&self) -> Date {
        self.end
    }

    fn next_path(&mut self, path: &mut Vec<CatEvent>) -> Result<bool> {
        path.clear();
        let mut t: Time = 0.0;
        loop {
            t += self.exponential.sample(&mut self.rng);
            if t >= self.year_fraction {
                break;
            }
            let days = (t * self.day_count as Real / self.year_fraction).round() as i32;
            let event_date = self.start.add_days(days)?;
            let loss = self.generate_beta()?;
            path.push((event_date, loss));
        }
        trace!(events = path.len(), "beta-risk path");
        Ok(true)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
