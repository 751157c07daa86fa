//! Expense tracker workflow

use serde_json::json;

use crate::audit::{AuditEntry, AuditEvent};
use crate::display::format_expense_report;
use crate::error::{PesBuddyError, PesBuddyResult};
use crate::models::{ExpenseCategory, ExpenseGrid, MAX_CATEGORIES};
use crate::prompt::Prompt;
use crate::services::summarize;

use super::{ask_return_or_exit, Flow, Session};

/// Collect a grid of weekly expenses, print the summary and ask where to go next
pub fn run<P: Prompt>(io: &mut P, session: &mut Session<'_>) -> PesBuddyResult<Flow> {
    let weeks = io.read_valid(
        "Enter the number of weeks for which you have tracked your expenses: ",
        |line| match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err("Enter a valid number of weeks!".to_string()),
        },
    )?;

    io.say("\nChoose the categories from:")?;
    io.say(&category_legend())?;

    let weekly_limit = io.read_amount("Enter your weekly spending limit: ")?;

    let category_count = io.read_valid(
        &format!(
            "Enter the number of main categories in which you have spent money(max {}): ",
            MAX_CATEGORIES
        ),
        |line| match line.trim().parse::<usize>() {
            Ok(n) if (1..=MAX_CATEGORIES).contains(&n) => Ok(n),
            _ => Err("Enter a valid number of categories!".to_string()),
        },
    )?;

    let mut grid = ExpenseGrid::new(category_count)
        .map_err(|e| PesBuddyError::Validation(e.to_string()))?;

    for week in 1..=weeks {
        io.say(&format!("\nEnter expenses for Week {}:", week))?;
        let mut row = Vec::with_capacity(category_count);
        for category in ExpenseCategory::all().into_iter().take(category_count) {
            let prompt = format!("Category {} ({}): ", category.number(), category);
            row.push(io.read_amount(&prompt)?);
        }
        grid.push_week(row)
            .map_err(|e| PesBuddyError::Validation(e.to_string()))?;
    }

    let report = summarize(&grid, weekly_limit);
    io.say(format_expense_report(&report).trim_end())?;

    session.storage.record(
        AuditEntry::new(AuditEvent::ExpenseSummarized, Some(session.user.as_str())).with_detail(&json!({
            "weeks": weeks,
            "categories": category_count,
            "weekly_limit": weekly_limit,
            "weeks_over_limit": report.overage_count(),
            "grand_total": report.grand_total(),
        })),
    );

    ask_return_or_exit(io)
}

fn category_legend() -> String {
    ExpenseCategory::all()
        .iter()
        .map(|category| format!("Category {}: {}", category.number(), category))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::testing::{output_of, scripted, seeded_storage};

    #[test]
    fn test_single_week_over_limit() {
        let (_temp, settings, storage) = seeded_storage();
        let mut session = Session::new(&storage, &settings, "Asha");
        let mut io = scripted(&["1", "1000", "2", "600", "450", "0"]);

        let flow = run(&mut io, &mut session).unwrap();

        assert_eq!(flow, Flow::ReturnToMenu);
        let output = output_of(io);
        assert!(output.contains("Total Expense for Week 1: 1050.00"));
        assert!(output.contains("exceeded your weekly limit by 5.00%"));
        assert!(output.contains("Total spent in Category 1 (Food): 600.00"));
        assert!(output.contains("Total spent in Category 2 (Travel): 450.00"));
    }

    #[test]
    fn test_invalid_entries_are_reprompted() {
        let (_temp, settings, storage) = seeded_storage();
        let mut session = Session::new(&storage, &settings, "Asha");
        let mut io = scripted(&[
            "0", "-2", "2", // weeks
            "-5", "abc", "1000", // limit
            "5", "0", "3", // categories
            "400", "-1", "300", "200", // week 1
            "100", "100", "100", // week 2
            "x",
        ]);

        let flow = run(&mut io, &mut session).unwrap();

        assert_eq!(flow, Flow::Terminate);
        let output = output_of(io);
        assert_eq!(output.matches("Enter a valid number of weeks!").count(), 2);
        assert_eq!(output.matches("Enter a valid number of categories!").count(), 2);
        assert_eq!(output.matches("Enter a valid non-negative amount!").count(), 3);
        assert!(output.contains("Total Expense for Week 1: 900.00"));
        assert!(output.contains("Total Expense for Week 2: 300.00"));
        assert!(!output.contains("Warning"));
        assert!(output.contains("Category 3 (Study materials): 300.00"));
    }

    #[test]
    fn test_summary_is_audited() {
        let (_temp, settings, storage) = seeded_storage();
        let mut session = Session::new(&storage, &settings, "Asha");
        let mut io = scripted(&["1", "100", "1", "250", "0"]);

        run(&mut io, &mut session).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        let last = entries.last().unwrap();
        assert_eq!(last.event, AuditEvent::ExpenseSummarized);
        assert_eq!(last.user.as_deref(), Some("Asha"));
        assert_eq!(last.detail.as_ref().unwrap()["weeks_over_limit"], 1);
    }
}
