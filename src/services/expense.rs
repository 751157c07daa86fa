//! Expense aggregation
//!
//! Sums an expense grid per week and per category and flags weeks that
//! overrun the weekly limit.

use serde::Serialize;

use crate::models::{ExpenseCategory, ExpenseGrid};

/// A week is only flagged once it exceeds the limit by more than 0.3%
pub const OVERAGE_TOLERANCE: f64 = 1.003;

/// An overrun of the weekly limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overage {
    /// Percentage above the true limit; `None` when the limit is zero or
    /// negative and no percentage is defined
    pub percent: Option<f64>,
}

/// Totals for one week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    /// One-based week number
    pub week: usize,
    pub total: f64,
    pub overage: Option<Overage>,
}

/// Totals for one category across all weeks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

/// Weekly and per-category summary of an expense grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseReport {
    pub weekly_limit: f64,
    pub weeks: Vec<WeekSummary>,
    pub categories: Vec<CategoryTotal>,
}

impl ExpenseReport {
    /// Number of weeks flagged as over the limit
    pub fn overage_count(&self) -> usize {
        self.weeks.iter().filter(|w| w.overage.is_some()).count()
    }

    /// Sum of all recorded spending
    pub fn grand_total(&self) -> f64 {
        self.categories.iter().map(|c| c.total).sum()
    }
}

/// Check one weekly total against the limit
///
/// The comparison uses the tolerance band; the reported percentage is
/// measured against the limit itself.
pub fn check_overage(total: f64, weekly_limit: f64) -> Option<Overage> {
    if total <= weekly_limit * OVERAGE_TOLERANCE {
        return None;
    }
    let percent =
        (weekly_limit > 0.0).then(|| (total - weekly_limit) / weekly_limit * 100.0);
    Some(Overage { percent })
}

/// Summarize a grid against a weekly limit
pub fn summarize(grid: &ExpenseGrid, weekly_limit: f64) -> ExpenseReport {
    let weeks = grid
        .weeks()
        .iter()
        .enumerate()
        .map(|(index, amounts)| {
            let total: f64 = amounts.iter().sum();
            WeekSummary {
                week: index + 1,
                total,
                overage: check_overage(total, weekly_limit),
            }
        })
        .collect();

    let categories = (0..grid.category_count())
        .filter_map(|column| {
            let category = ExpenseCategory::from_index(column)?;
            let total = grid.weeks().iter().map(|amounts| amounts[column]).sum();
            Some(CategoryTotal { category, total })
        })
        .collect();

    ExpenseReport {
        weekly_limit,
        weeks,
        categories,
    }
}
