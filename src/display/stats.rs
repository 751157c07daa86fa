//! Activity statistics formatting

use crate::services::ActivityStats;

/// Format booking and ordering totals
pub fn format_activity_stats(stats: &ActivityStats, user: Option<&str>, currency: &str) -> String {
    let mut output = match user {
        Some(name) => format!("Activity for {}\n", name),
        None => "Activity for all users\n".to_string(),
    };
    output.push_str("====================\n");
    output.push_str(&format!("Scooter bookings:  {}\n", stats.bookings));
    output.push_str(&format!("Total fares:       {:.2}\n", stats.total_fare));
    output.push_str(&format!("Items ordered:     {}\n", stats.items_ordered));
    output.push_str(&format!("Order sessions:    {}\n", stats.order_sessions));
    output.push_str(&format!("Canteen spend:     {} {}\n", currency, stats.order_spend));
    output
}
