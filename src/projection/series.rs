//! Projection output structures

use super::summary::ProjectionSummary;
use serde::{Deserialize, Serialize};

/// Portfolio position at the end of one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Month number, starting at 1
    pub month: u32,

    /// Initial capital plus contributions up to and including this month
    pub total_contributed: f64,

    /// Growth on top of the contributed amount (negative after losses)
    pub interest_accumulated: f64,

    /// Portfolio value at month end
    pub total_value: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// One entry per month, ordered by month
    pub series: Vec<SeriesEntry>,

    /// Aggregate metrics for the whole horizon
    pub summary: ProjectionSummary,
}

impl Projection {
    /// Last month of the series, if any months were projected
    pub fn final_entry(&self) -> Option<&SeriesEntry> {
        self.series.last()
    }

    /// Entry for a given 1-based month
    pub fn month(&self, month: u32) -> Option<&SeriesEntry> {
        if month == 0 {
            return None;
        }
        self.series.get((month - 1) as usize)
    }

    /// Year-end entries (months 12, 24, ...)
    pub fn year_ends(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.series.iter().filter(|e| e.month % 12 == 0)
    }
}
