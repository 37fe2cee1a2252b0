//! Cumulative balance over the buyback contract.

use std::fmt;

use serde::Serialize;

use super::metrics::ProjectMetrics;

/// Term of a buyback contract (years).
pub const OA_CONTRACT_YEARS: u32 = 20;

/// Cumulative balance at the end of a contract year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlowYear {
    /// Year index, 0 being the installation year before any revenue.
    pub year: u32,
    /// Net revenue collected so far minus the installation cost (€).
    pub cumulative_balance: f64,
}

/// Year-by-year cumulative balance over a buyback contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowProjection {
    pub years: Vec<CashFlowYear>,
}

impl CashFlowProjection {
    /// Projects the balance for years `0..=contract_years`.
    pub fn new(installation_cost: f64, net_annual_revenue: f64, contract_years: u32) -> Self {
        let years = (0..=contract_years)
            .map(|year| CashFlowYear {
                year,
                cumulative_balance: f64::from(year) * net_annual_revenue - installation_cost,
            })
            .collect();
        Self { years }
    }

    pub fn from_metrics(metrics: &ProjectMetrics, contract_years: u32) -> Self {
        Self::new(
            metrics.installation_cost,
            metrics.net_annual_revenue(),
            contract_years,
        )
    }

    /// Balance at the end of the contract (€).
    pub fn final_balance(&self) -> f64 {
        self.years.last().map_or(0.0, |y| y.cumulative_balance)
    }

    /// First year whose cumulative balance is non-negative, if reached
    /// within the contract.
    pub fn break_even_year(&self) -> Option<u32> {
        self.years
            .iter()
            .find(|y| y.cumulative_balance >= 0.0)
            .map(|y| y.year)
    }
}

impl fmt::Display for CashFlowProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Cash Flow ---")?;
        for y in &self.years {
            writeln!(f, "Year {:>2}: {:>12.0} €", y.year, y.cumulative_balance)?;
        }
        match self.break_even_year() {
            Some(year) => writeln!(f, "Break-even year:       {year}")?,
            None => writeln!(f, "Break-even year:       not within contract")?,
        }
        write!(f, "Balance at term:       {:.0} €", self.final_balance())
    }
}
