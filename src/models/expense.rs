//! Expense grid model
//!
//! One row per tracked week, one column per spending category. The number
//! of categories is fixed when the grid is created.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of categories a grid can track
pub const MAX_CATEGORIES: usize = 4;

/// The spending categories, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Food,
    Travel,
    StudyMaterials,
    Miscellaneous,
}

impl ExpenseCategory {
    /// All categories in column order
    pub fn all() -> [ExpenseCategory; MAX_CATEGORIES] {
        [
            ExpenseCategory::Food,
            ExpenseCategory::Travel,
            ExpenseCategory::StudyMaterials,
            ExpenseCategory::Miscellaneous,
        ]
    }

    /// Category for a zero-based column index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// One-based number shown in prompts and summaries
    pub fn number(&self) -> usize {
        *self as usize + 1
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => write!(f, "Food"),
            Self::Travel => write!(f, "Travel"),
            Self::StudyMaterials => write!(f, "Study materials"),
            Self::Miscellaneous => write!(f, "Miscellaneous"),
        }
    }
}

/// Week x category matrix of spending amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseGrid {
    category_count: usize,
    weeks: Vec<Vec<f64>>,
}

impl ExpenseGrid {
    /// Create an empty grid tracking `category_count` categories
    pub fn new(category_count: usize) -> Result<Self, ExpenseGridError> {
        if !(1..=MAX_CATEGORIES).contains(&category_count) {
            return Err(ExpenseGridError::CategoryCount(category_count));
        }
        Ok(Self {
            category_count,
            weeks: Vec::new(),
        })
    }

    /// Number of categories per week
    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// The recorded weeks, in entry order
    pub fn weeks(&self) -> &[Vec<f64>] {
        &self.weeks
    }

    /// Append one week of amounts
    pub fn push_week(&mut self, amounts: Vec<f64>) -> Result<(), ExpenseGridError> {
        if amounts.len() != self.category_count {
            return Err(ExpenseGridError::RowWidth {
                expected: self.category_count,
                got: amounts.len(),
            });
        }
        if let Some(&bad) = amounts.iter().find(|a| !a.is_finite() || **a < 0.0) {
            return Err(ExpenseGridError::InvalidAmount(bad));
        }
        self.weeks.push(amounts);
        Ok(())
    }
}

/// Errors raised while building an expense grid
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseGridError {
    CategoryCount(usize),
    RowWidth { expected: usize, got: usize },
    InvalidAmount(f64),
}

impl fmt::Display for ExpenseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryCount(n) => write!(
                f,
                "Category count must be between 1 and {} (got {})",
                MAX_CATEGORIES, n
            ),
            Self::RowWidth { expected, got } => {
                write!(f, "Expected {} amounts per week, got {}", expected, got)
            }
            Self::InvalidAmount(amount) => {
                write!(f, "Amounts must be non-negative numbers (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseGridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_count_bounds() {
        assert!(ExpenseGrid::new(0).is_err());
        assert!(ExpenseGrid::new(1).is_ok());
        assert!(ExpenseGrid::new(4).is_ok());
        assert_eq!(
            ExpenseGrid::new(5),
            Err(ExpenseGridError::CategoryCount(5))
        );
    }

    #[test]
    fn test_push_week_checks_width() {
        let mut grid = ExpenseGrid::new(3).unwrap();
        assert!(grid.push_week(vec![1.0, 2.0, 3.0]).is_ok());
        assert_eq!(
            grid.push_week(vec![1.0, 2.0]),
            Err(ExpenseGridError::RowWidth {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(grid.weeks().len(), 1);
    }

    #[test]
    fn test_push_week_rejects_negative() {
        let mut grid = ExpenseGrid::new(1).unwrap();
        assert!(grid.push_week(vec![-5.0]).is_err());
        assert!(grid.weeks().is_empty());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ExpenseCategory::from_index(2).unwrap().to_string(), "Study materials");
        assert_eq!(ExpenseCategory::from_index(4), None);
        assert_eq!(ExpenseCategory::Miscellaneous.number(), 4);
    }
}
