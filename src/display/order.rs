//! Canteen menu and order formatting

use crate::models::{Canteen, MenuItem};
use crate::services::OrderSummary;

/// Format a numbered menu
pub fn format_menu(canteen: Canteen, items: &[MenuItem], currency: &str) -> String {
    let mut output = format!("\nMenu for {}:\n", canteen);
    if items.is_empty() {
        output.push_str("(no items listed)\n");
    }
    for (index, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} - {} {}\n",
            index + 1,
            item.name,
            currency,
            item.price
        ));
    }
    output
}

/// Format the end-of-session order summary
pub fn format_order_summary(summary: &OrderSummary, currency: &str) -> String {
    let mut output = String::from("\n---- Your Order Summary ----\n");
    if summary.entries.is_empty() {
        output.push_str("No items ordered.\n");
    }
    for (index, entry) in summary.entries.iter().enumerate() {
        output.push_str(&format!(
            "Item {}: '{}', from '{}' - {} {}\n",
            index + 1,
            entry.item_name,
            entry.source_name,
            currency,
            entry.price
        ));
    }
    output.push_str(&format!("\nTotal Cost: {} {}\n", currency, summary.total_cost));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::OrderLedger;

    #[test]
    fn test_menu_numbering() {
        let items = vec![MenuItem::new("Veg Puff", 25), MenuItem::new("Samosa", 20)];
        let text = format_menu(Canteen::Skm, &items, "Rs.");
        assert!(text.contains("Menu for SKM Canteen:"));
        assert!(text.contains("1. Veg Puff - Rs. 25"));
        assert!(text.contains("2. Samosa - Rs. 20"));
    }

    #[test]
    fn test_summary_total() {
        let items = vec![MenuItem::new("Veg Puff", 25)];
        let mut ledger = OrderLedger::new();
        ledger.place_order(Canteen::Skm, &items, 1);
        ledger.place_order(Canteen::Skm, &items, 1);

        let text = format_order_summary(&ledger.summary(), "Rs.");
        assert!(text.contains("Item 2: 'Veg Puff', from 'SKM Canteen' - Rs. 25"));
        assert!(text.contains("Total Cost: Rs. 50"));
    }

    #[test]
    fn test_empty_summary() {
        let text = format_order_summary(&OrderLedger::new().summary(), "Rs.");
        assert!(text.contains("No items ordered."));
        assert!(text.contains("Total Cost: Rs. 0"));
    }
}
