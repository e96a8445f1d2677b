//! Incremental aggregation of simulated paths.

use cat_core::{Real, Result, Size};
use cat_math::Statistics;

use crate::cat_risk::{CatEvent, CatSimulation};

/// Summary of a batch of simulated paths.
#[derive(Debug, Clone, Default)]
pub struct PathStatistics {
    /// Number of events in each path.
    pub event_counts: Statistics,
    /// Loss of every individual event.
    pub severities: Statistics,
    /// Total loss of each path.
    pub path_losses: Statistics,
}

impl PathStatistics {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one path into the summary.
    pub fn add_path(&mut self, path: &[CatEvent]) {
        self.event_counts.add(path.len() as Real);
        self.severities.add_all(path.iter().map(|&(_, loss)| loss));
        self.path_losses.add(path.iter().map(|&(_, loss)| loss).sum());
    }

    /// Number of paths folded in.
    pub fn paths(&self) -> Size {
        self.event_counts.samples()
    }
}

/// Pull up to `max_paths` paths from `sim`, stopping early if it is
/// exhausted, and summarise them.
pub fn aggregate_paths<S>(sim: &mut S, max_paths: Size) -> Result<PathStatistics>
where
    S: CatSimulation + ?Sized,
{
    let mut stats = PathStatistics::new();
    let mut path = Vec::new();
    for _ in 0..max_paths {
        if !sim.next_path(&mut path)? {
            break;
        }
        stats.add_path(&path);
    }
    Ok(stats)
}
