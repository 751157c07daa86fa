//! Expense summary formatting

use crate::services::ExpenseReport;

/// Format the weekly and per-category summary
pub fn format_expense_report(report: &ExpenseReport) -> String {
    let mut output = String::new();

    output.push_str("\n---- Weekly Expense Summary ----\n");
    for week in &report.weeks {
        output.push_str(&format!(
            "Total Expense for Week {}: {:.2}\n",
            week.week, week.total
        ));
        if let Some(overage) = &week.overage {
            match overage.percent {
                Some(percent) => output.push_str(&format!(
                    "Warning! You have exceeded your weekly limit by {:.2}%\n",
                    percent
                )),
                None => output.push_str("Warning! You have exceeded your weekly limit\n"),
            }
        }
    }

    output.push_str("\n---- Category-wise Expense Summary ----\n");
    for category in &report.categories {
        output.push_str(&format!(
            "Total spent in Category {} ({}): {:.2}\n",
            category.category.number(),
            category.category,
            category.total
        ));
    }

    output
}
