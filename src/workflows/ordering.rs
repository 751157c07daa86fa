//! Canteen ordering workflow

use serde_json::json;

use crate::audit::{AuditEntry, AuditEvent};
use crate::display::{format_menu, format_order_summary};
use crate::error::PesBuddyResult;
use crate::models::Canteen;
use crate::prompt::Prompt;
use crate::services::{load_menu, MenuLoad, OrderOutcome};

use super::{ask_return_or_exit, Flow, Session};

/// Take orders across canteens until the user finishes, then print the summary
///
/// Every run starts a new, empty order.
pub fn run<P: Prompt>(io: &mut P, session: &mut Session<'_>) -> PesBuddyResult<Flow> {
    session.orders.reset();
    io.say("\nWelcome to PES Doormato!")?;

    loop {
        io.say("\nSelect a Canteen!")?;
        for (index, canteen) in Canteen::all().iter().enumerate() {
            io.say(&format!("{}: {}", index + 1, canteen))?;
        }

        let choice = io.read_int("Enter your choice (0 to finish ordering): ")?;
        if choice == 0 {
            break;
        }
        let Some(canteen) = Canteen::from_selection(choice) else {
            io.say("Enter a Valid choice!")?;
            continue;
        };

        io.say(&format!("\nWelcome to {}!", canteen))?;
        let view_menu = io.read_valid("Enter 1 to view Menu, 0 to go back: ", |line| {
            match line.trim() {
                "1" => Ok(true),
                "0" => Ok(false),
                _ => Err("Invalid Input!".to_string()),
            }
        })?;
        if view_menu {
            order_from(io, session, canteen)?;
        }
    }

    let summary = session.orders.summary();
    io.say(format_order_summary(&summary, &session.settings.currency_symbol).trim_end())?;

    session.storage.record(
        AuditEntry::new(AuditEvent::OrderSessionClosed, Some(session.user.as_str())).with_detail(&json!({
            "session_id": summary.session_id,
            "items": summary.entries.len(),
            "total_cost": summary.total_cost,
        })),
    );

    ask_return_or_exit(io)
}

fn order_from<P: Prompt>(io: &mut P, session: &mut Session<'_>, canteen: Canteen) -> PesBuddyResult<()> {
    let items = match load_menu(&session.storage.menus, canteen)? {
        MenuLoad::Loaded(items) => items,
        MenuLoad::Unavailable => {
            io.say(&format!("Sorry, the menu for {} is currently unavailable.", canteen))?;
            return Ok(());
        }
    };

    let currency = &session.settings.currency_symbol;
    io.say(format_menu(canteen, &items, currency).trim_end())?;
    let selection = io.read_int("Enter your item number (0 to cancel): ")?;

    match session.orders.place_order(canteen, &items, selection) {
        OrderOutcome::Added(entry) => {
            io.say(&format!(
                "Added '{}' from {} to your order.",
                entry.item_name, entry.source_name
            ))?;
            session.storage.record(
                AuditEntry::new(AuditEvent::OrderPlaced, Some(session.user.as_str())).with_detail(&entry),
            );
        }
        OrderOutcome::Cancelled => {}
        OrderOutcome::InvalidSelection => io.say("Invalid item number.")?,
        OrderOutcome::Full => io.say("Maximum order limit reached!")?,
        OrderOutcome::TotalOverflow => io.say("Order total too large; item not added.")?,
    }
    Ok(())
}
