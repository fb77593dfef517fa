//! Running balance tracked while stepping through the months

use super::series::SeriesEntry;

/// Balance state at the end of a month
#[derive(Debug, Clone, Copy)]
pub struct ProjectorState {
    /// Last completed month (0 before the first month)
    pub month: u32,

    /// Running portfolio value
    pub balance: f64,

    /// Initial capital plus every contribution made so far
    pub contributed: f64,
}

impl ProjectorState {
    /// Opening state: the initial capital counts as both balance and contribution
    pub fn opening(initial_capital: f64) -> Self {
        Self {
            month: 0,
            balance: initial_capital,
            contributed: initial_capital,
        }
    }

    /// Advance one month: compound the prior balance, then add the contribution
    pub fn advance_month(&mut self, monthly_rate: f64, monthly_contribution: f64) {
        self.month += 1;

        // Contributions are made at month end, so this month's one earns nothing yet
        if monthly_rate != 0.0 {
            self.balance *= 1.0 + monthly_rate;
        }

        self.balance += monthly_contribution;
        self.contributed += monthly_contribution;
    }

    /// Snapshot of the current state as a series entry
    pub fn entry(&self) -> SeriesEntry {
        SeriesEntry {
            month: self.month,
            total_contributed: self.contributed,
            interest_accumulated: self.balance - self.contributed,
            total_value: self.balance,
        }
    }
}
