//! Historical event-set resampling.
//!
//! An [`EventSet`] holds a time-ordered record of historical catastrophe
//! events observed over `[events_start, events_end]`. Each simulation it
//! spawns walks that record in successive, non-overlapping sub-periods with
//! the same calendar shape as the reference window, and replays the events
//! of each sub-period shifted by whole years onto the reference window.
//!
//! For a reference window `[start, end]` spanning `Y = end.year - start.year`
//! calendar years:
//!
//! - the first sub-period starts on `start`'s month and day, in the first
//!   historical year where that date is not before `events_start`, and ends
//!   on `end`'s month and day `Y` years later;
//! - sub-periods advance by `Y + 1` years when the window reaches past
//!   `start + Y` years (always the case for a same-year window longer than
//!   one day), else by `Y` years, and never by less than one year;
//! - the simulation is exhausted once a sub-period would end after
//!   `events_end`; a trailing partial block is discarded.

use std::sync::Arc;

use cat_core::{ensure, Error, Integer, Result, Size};
use cat_time::Date;
use tracing::{debug, trace};

use crate::cat_risk::{check_window, CatEvent, CatRisk, CatSimulation};

// ── EventSet ─────────────────────────────────────────────────────────────────

/// Historical catastrophe event set.
///
/// The events are shared, not copied, with every simulation the set spawns.
#[derive(Debug, Clone)]
pub struct EventSet {
    events: Arc<[CatEvent]>,
    events_start: Date,
    events_end: Date,
}

impl EventSet {
    /// Create an event set from historical events observed over
    /// `[events_start, events_end]`.
    ///
    /// # Errors
    /// `InvalidInput` if the window is inverted, an event lies outside it,
    /// the events are not sorted by date, or a loss is negative or not finite.
    pub fn new(
        events: impl Into<Arc<[CatEvent]>>,
        events_start: Date,
        events_end: Date,
    ) -> Result<Self> {
        ensure!(
            events_start <= events_end,
            "historical window end {events_end} precedes its start {events_start}"
        );
        let events = events.into();
        for (k, &(date, loss)) in events.iter().enumerate() {
            ensure!(
                (events_start..=events_end).contains(&date),
                "event {k} on {date} lies outside [{events_start}, {events_end}]"
            );
            ensure!(
                loss.is_finite() && loss >= 0.0,
                "event {k} on {date} has invalid loss {loss}"
            );
        }
        if let Some(k) = events.windows(2).position(|w| w[1].0 < w[0].0) {
            return Err(Error::InvalidInput(format!(
                "events must be sorted by date: {} follows {}",
                events[k + 1].0,
                events[k].0
            )));
        }
        Ok(Self {
            events,
            events_start,
            events_end,
        })
    }

    /// The historical events, in date order.
    pub fn events(&self) -> &[CatEvent] {
        &self.events
    }

    /// Start of the historical window.
    pub fn events_start(&self) -> Date {
        self.events_start
    }

    /// End of the historical window.
    pub fn events_end(&self) -> Date {
        self.events_end
    }

    /// Create a typed simulation over `[start, end]`.
    pub fn simulation(&self, start: Date, end: Date) -> Result<EventSetSimulation> {
        EventSetSimulation::new(
            Arc::clone(&self.events),
            self.events_start,
            self.events_end,
            start,
            end,
        )
    }
}

impl CatRisk for EventSet {
    fn new_simulation(&self, start: Date, end: Date) -> Result<Box<dyn CatSimulation>> {
        Ok(Box::new(self.simulation(start, end)?))
    }
}

// ── EventSetSimulation ───────────────────────────────────────────────────────

/// Current position of an [`EventSetSimulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready {
        period_start: Date,
        period_end: Date,
    },
    Exhausted,
}

/// Simulation replaying successive sub-periods of an [`EventSet`].
#[derive(Debug, Clone)]
pub struct EventSetSimulation {
    events: Arc<[CatEvent]>,
    events_end: Date,
    start: Date,
    end: Date,
    years: Integer,
    step: Integer,
    period_year: Integer,
    state: State,
    i: Size,
}

impl EventSetSimulation {
    /// Create a simulation of `[start, end]` over a shared event record.
    ///
    /// The events are assumed sorted and within `[events_start, events_end]`,
    /// as [`EventSet::new`] guarantees.
    ///
    /// # Errors
    /// `InvalidInput` if `end < start`.
    pub fn new(
        events: Arc<[CatEvent]>,
        events_start: Date,
        events_end: Date,
        start: Date,
        end: Date,
    ) -> Result<Self> {
        check_window(start, end)?;
        let years = end.year() as Integer - start.year() as Integer;
        let step = if start.add_years(years)? < end {
            years + 1
        } else {
            years
        }
        .max(1);

        let first_year = match aligned(events_start.year() as Integer, start) {
            Some(candidate) if candidate >= events_start => events_start.year() as Integer,
            _ => events_start.year() as Integer + 1,
        };

        let mut sim = Self {
            events,
            events_end,
            start,
            end,
            years,
            step,
            period_year: first_year,
            state: State::Exhausted,
            i: 0,
        };
        sim.state = sim.period(first_year);
        if let State::Ready { period_start, .. } = sim.state {
            sim.skip_before(period_start);
        }
        debug!(
            %start, %end, years, step, first_year,
            events = sim.events.len(),
            "event-set simulation created"
        );
        Ok(sim)
    }

    /// Whole calendar years spanned by the reference window.
    pub fn years(&self) -> Integer {
        self.years
    }

    /// Years between the starts of consecutive sub-periods.
    pub fn step(&self) -> Integer {
        self.step
    }

    /// The historical sub-period the next path will be drawn from, or `None`
    /// once the simulation is exhausted.
    pub fn current_period(&self) -> Option<(Date, Date)> {
        match self.state {
            State::Ready {
                period_start,
                period_end,
            } if period_end <= self.events_end => Some((period_start, period_end)),
            _ => None,
        }
    }

    fn period(&self, year: Integer) -> State {
        let bounds = aligned(year, self.start)
            .zip(aligned(year + self.years, self.end));
        match bounds {
            Some((period_start, period_end)) => State::Ready {
                period_start,
                period_end,
            },
            None => State::Exhausted,
        }
    }

    fn skip_before(&mut self, date: Date) {
        while self.i < self.events.len() && self.events[self.i].0 < date {
            self.i += 1;
        }
    }
}

/// `anchor`'s month and day in `year`, clamped to the end of the month.
fn aligned(year: Integer, anchor: Date) -> Option<Date> {
    let year = u16::try_from(year).ok()?;
    Date::from_ymd_clamped(year, anchor.month(), anchor.day_of_month()).ok()
}

impl CatSimulation for EventSetSimulation {
    fn start(&self) -> Date {
        self.start
    }

    fn end(&self) -> Date {
        self.end
    }

    fn next_path(&mut self, path: &mut Vec<CatEvent>) -> Result<bool> {
        path.clear();

        let Some((period_start, period_end)) = self.current_period() else {
            if self.state != State::Exhausted {
                debug!(start = %self.start, end = %self.end, "event-set simulation exhausted");
                self.state = State::Exhausted;
            }
            return Ok(false);
        };

        self.skip_before(period_start);
        let shift = self.start.year() as Integer - period_start.year() as Integer;
        while self.i < self.events.len() && self.events[self.i].0 <= period_end {
            let (date, loss) = self.events[self.i];
            let shifted = date.add_years(shift)?.clamp(self.start, self.end);
            path.push((shifted, loss));
            self.i += 1;
        }
        trace!(%period_start, %period_end, events = path.len(), "event-set path");

        self.period_year += self.step;
        self.state = self.period(self.period_year);
        Ok(true)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample_events() -> Vec<CatEvent> {
        vec![
            (date(2012, 2, 1), 100.0),
            (date(2013, 7, 1), 150.0),
            (date(2014, 1, 5), 50.0),
        ]
    }

    fn sample_set(events: Vec<CatEvent>) -> EventSet {
        EventSet::new(events, date(2011, 1, 1), date(2014, 12, 31)).unwrap()
    }

    #[test]
    fn test_event_set_whole_years() {
        let cat_risk = sample_set(sample_events());
        let mut sim = cat_risk.new_simulation(date(2015, 1, 1), date(2015, 12, 31)).unwrap();
        let mut path = Vec::new();

        // 2011: nothing happened
        assert!(sim.next_path(&mut path).unwrap());
        assert!(path.is_empty());

        assert!(sim.next_path(&mut path).unwrap());
        assert_eq!(path, vec![(date(2015, 2, 1), 100.0)]);

        assert!(sim.next_path(&mut path).unwrap());
        assert_eq!(path, vec![(date(2015, 7, 1), 150.0)]);

        assert!(sim.next_path(&mut path).unwrap());
        assert_eq!(path, vec![(date(2015, 1, 5), 50.0)]);

        assert!(!sim.next_path(&mut path).unwrap());
        assert!(path.is_empty());
    }

    #[test]
    fn test_event_set_irregular_periods() {
        let cat_risk = sample_set(sample_events());
        let mut sim = cat_risk.simulation(date(2015, 1, 2), date(2016, 1, 5)).unwrap();
        assert_eq!(sim.years(), 1);
        assert_eq!(sim.step(), 2);
        assert_eq!(
            sim.current_period(),
            Some((date(2011, 1, 2), date(2012, 1, 5)))
        );
        let mut path = Vec::new();

        // [2011-01-02, 2012-01-05] holds no event
        assert!(sim.next_path(&mut path).unwrap());
        assert!(path.is_empty());

        // [2013-01-02, 2014-01-05]; the 2012 event fell between periods
        assert!(sim.next_path(&mut path).unwrap());
        assert_eq!(
            path,
            vec![(date(2015, 7, 1), 150.0), (date(2016, 1, 5), 50.0)]
        );

        assert!(!sim.next_path(&mut path).unwrap());
        assert_eq!(sim.current_period(), None);
    }

    #[test]
    fn test_event_set_no_events() {
        let cat_risk = sample_set(vec![]);
        let mut sim = cat_risk.new_simulation(date(2015, 1, 2), date(2016, 1, 5)).unwrap();
        let mut path = vec![(date(2015, 3, 3), 1.0)];

        assert!(sim.next_path(&mut path).unwrap());
        assert!(path.is_empty());
        assert!(sim.next_path(&mut path).unwrap());
        assert!(path.is_empty());
        assert!(!sim.next_path(&mut path).unwrap());
        // exhaustion is terminal
        assert!(!sim.next_path(&mut path).unwrap());
    }

    #[test]
    fn test_first_period_rolls_to_next_year() {
        // history starts after the window's month/day
        let set = EventSet::new(
            vec![(date(2000, 3, 1), 1.0), (date(2001, 2, 1), 2.0)],
            date(2000, 2, 1),
            date(2003, 6, 30),
        )
        .unwrap();
        let mut sim = set.simulation(date(2020, 1, 1), date(2020, 12, 31)).unwrap();
        assert_eq!(
            sim.current_period(),
            Some((date(2001, 1, 1), date(2001, 12, 31)))
        );
        let mut path = Vec::new();
        assert!(sim.next_path(&mut path).unwrap());
        assert_eq!(path, vec![(date(2020, 2, 1), 2.0)]);
        assert!(sim.next_path(&mut path).unwrap());
        assert!(path.is_empty());
        // 2003 is only half covered
        assert!(!sim.next_path(&mut path).unwrap());
    }

    #[test]
    fn test_leap_day_is_clamped() {
        let set = EventSet::new(
            vec![(date(2012, 2, 29), 7.0)],
            date(2012, 1, 1),
            date(2012, 12, 31),
        )
        .unwrap();
        let mut sim = set.simulation(date(2013, 1, 1), date(2013, 12, 31)).unwrap();
        let mut path = Vec::new();
        assert!(sim.next_path(&mut path).unwrap());
        assert_eq!(path, vec![(date(2013, 2, 28), 7.0)]);
    }

    #[test]
    fn test_single_day_window_advances() {
        let set = sample_set(sample_events());
        let mut sim = set.simulation(date(2020, 2, 1), date(2020, 2, 1)).unwrap();
        assert_eq!(sim.step(), 1);
        let mut path = Vec::new();
        let mut found = Vec::new();
        while sim.next_path(&mut path).unwrap() {
            found.push(path.len());
        }
        // 2011-02-01 … 2014-02-01
        assert_eq!(found, vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_simulations_share_events() {
        let set = sample_set(sample_events());
        let a = set.simulation(date(2015, 1, 1), date(2015, 12, 31)).unwrap();
        let b = set.simulation(date(2016, 1, 1), date(2016, 12, 31)).unwrap();
        assert!(Arc::ptr_eq(&a.events, &b.events));
        assert!(Arc::ptr_eq(&a.events, &set.events));
    }

    #[test]
    fn test_invalid_construction() {
        let start = date(2011, 1, 1);
        let end = date(2014, 12, 31);
        assert!(matches!(
            EventSet::new(vec![], end, start),
            Err(Error::InvalidInput(_))
        ));
        let unsorted = vec![(date(2013, 1, 1), 1.0), (date(2012, 1, 1), 1.0)];
        assert!(matches!(
            EventSet::new(unsorted, start, end),
            Err(Error::InvalidInput(_))
        ));
        let outside = vec![(date(2015, 1, 1), 1.0)];
        assert!(EventSet::new(outside, start, end).is_err());
        let negative = vec![(date(2012, 1, 1), -1.0)];
        assert!(EventSet::new(negative, start, end).is_err());
        let nan = vec![(date(2012, 1, 1), f64::NAN)];
        assert!(EventSet::new(nan, start, end).is_err());

        let set = sample_set(sample_events());
        assert!(matches!(
            set.new_simulation(date(2016, 1, 1), date(2015, 1, 1)),
            Err(Error::InvalidInput(_))
        ));
    }
}
