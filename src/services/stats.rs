//! Activity statistics
//!
//! Booking and ordering totals rebuilt from the audit log, optionally for
//! a single user.

use serde::Serialize;
use tracing::warn;

use crate::audit::{AuditEntry, AuditEvent};
use crate::models::{Booking, OrderEntry};

/// Totals over a run of audit entries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityStats {
    pub bookings: usize,
    pub total_fare: f64,
    pub items_ordered: usize,
    pub order_spend: i64,
    pub order_sessions: usize,
}

impl ActivityStats {
    /// Tally bookings and orders, keeping only entries by `user` when given
    ///
    /// Entries whose detail does not decode are left out of the totals.
    pub fn from_entries(entries: &[AuditEntry], user: Option<&str>) -> Self {
        let mut stats = Self::default();

        for entry in entries {
            if user.is_some_and(|name| entry.user.as_deref() != Some(name)) {
                continue;
            }

            match entry.event {
                AuditEvent::ScooterBooked => {
                    if let Some(booking) = decode::<Booking>(entry) {
                        stats.bookings += 1;
                        stats.total_fare += booking.fare;
                    }
                }
                AuditEvent::OrderPlaced => {
                    if let Some(order) = decode::<OrderEntry>(entry) {
                        stats.items_ordered += 1;
                        stats.order_spend = stats.order_spend.saturating_add(order.price);
                    }
                }
                AuditEvent::OrderSessionClosed => stats.order_sessions += 1,
                _ => {}
            }
        }

        stats
    }
}

fn decode<T: serde::de::DeserializeOwned>(entry: &AuditEntry) -> Option<T> {
    let detail = entry.detail.clone()?;
    match serde_json::from_value(detail) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(event = %entry.event, "ignoring audit detail: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingId, Canteen};
    use serde_json::json;

    fn booking(fare: f64) -> Booking {
        Booking {
            id: BookingId::new(),
            unit_id: 103,
            driver_name: "Raj".into(),
            pickup: "GJBC".into(),
            destination: "OAT".into(),
            distance_km: 2.0,
            fare_per_km: 9.8,
            fare,
        }
    }

    fn entries() -> Vec<AuditEntry> {
        vec![
            AuditEntry::new(AuditEvent::LoginSucceeded, Some("Asha")),
            AuditEntry::new(AuditEvent::ScooterBooked, Some("Asha")).with_detail(&booking(19.6)),
            AuditEntry::new(AuditEvent::ScooterBooked, Some("Ravi")).with_detail(&booking(30.0)),
            AuditEntry::new(AuditEvent::OrderPlaced, Some("Asha"))
                .with_detail(&OrderEntry::new("Veg Puff", Canteen::Skm.name(), 25)),
            AuditEntry::new(AuditEvent::OrderPlaced, Some("Asha"))
                .with_detail(&OrderEntry::new("Veg Puff", Canteen::Skm.name(), 25)),
            AuditEntry::new(AuditEvent::OrderSessionClosed, Some("Asha"))
                .with_detail(&json!({ "items": 2, "total_cost": 50 })),
        ]
    }

    #[test]
    fn test_totals_for_everyone() {
        let stats = ActivityStats::from_entries(&entries(), None);
        assert_eq!(stats.bookings, 2);
        assert!((stats.total_fare - 49.6).abs() < 1e-9);
        assert_eq!(stats.items_ordered, 2);
        assert_eq!(stats.order_spend, 50);
        assert_eq!(stats.order_sessions, 1);
    }

    #[test]
    fn test_totals_for_one_user() {
        let ravi = ActivityStats::from_entries(&entries(), Some("Ravi"));
        assert_eq!(ravi.bookings, 1);
        assert_eq!(ravi.total_fare, 30.0);
        assert_eq!(ravi.items_ordered, 0);

        let nobody = ActivityStats::from_entries(&entries(), Some("Nobody"));
        assert_eq!(nobody, ActivityStats::default());
    }

    #[test]
    fn test_undecodable_detail_is_ignored() {
        let entries = vec![
            AuditEntry::new(AuditEvent::ScooterBooked, Some("Asha")).with_detail(&json!({ "fare": "lots" })),
            AuditEntry::new(AuditEvent::OrderPlaced, Some("Asha")),
        ];
        assert_eq!(ActivityStats::from_entries(&entries, None), ActivityStats::default());
    }
}
