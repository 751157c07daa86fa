//! Dispatch ledger
//!
//! The scooter catalog for one dispatch session. Units only ever go from
//! available to booked; there is no return or cancellation.

use crate::models::{Booking, BookingId, ScooterUnit, Trip};

/// Result of a booking request
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Booked(Booking),
    AlreadyBooked,
    NotFound,
}

/// Owned, fixed-size scooter catalog
#[derive(Debug, Clone)]
pub struct DispatchLedger {
    units: Vec<ScooterUnit>,
}

impl Default for DispatchLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchLedger {
    /// Ledger holding the default fleet, all available
    pub fn new() -> Self {
        Self {
            units: ScooterUnit::default_fleet(),
        }
    }

    /// Restore the default fleet
    pub fn reset(&mut self) {
        self.units = ScooterUnit::default_fleet();
    }

    /// All units, in catalog order
    pub fn units(&self) -> &[ScooterUnit] {
        &self.units
    }

    /// Units that can still be booked, in catalog order
    pub fn list_available(&self) -> Vec<&ScooterUnit> {
        self.units.iter().filter(|unit| unit.available).collect()
    }

    /// Book a unit for a resolved trip
    ///
    /// On success the unit is marked unavailable and the fare is computed in
    /// the same step. Any other outcome leaves the catalog untouched.
    pub fn book(&mut self, unit_id: u32, trip: &Trip) -> BookingOutcome {
        let Some(unit) = self.units.iter_mut().find(|unit| unit.id == unit_id) else {
            return BookingOutcome::NotFound;
        };

        if !unit.available {
            return BookingOutcome::AlreadyBooked;
        }

        let booking = Booking {
            id: BookingId::new(),
            unit_id: unit.id,
            driver_name: unit.driver_name.clone(),
            pickup: trip.pickup().to_string(),
            destination: trip.destination().to_string(),
            distance_km: trip.distance_km(),
            fare_per_km: unit.fare_per_km,
            fare: unit.fare_per_km * trip.distance_km(),
        };
        unit.available = false;

        BookingOutcome::Booked(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gjbc_to_oat() -> Trip {
        Trip::resolve("GJBC", "OAT").unwrap()
    }

    #[test]
    fn test_list_available_preserves_order() {
        let mut ledger = DispatchLedger::new();
        ledger.book(102, &gjbc_to_oat());

        let ids: Vec<u32> = ledger.list_available().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![101, 103, 104, 105]);
    }

    #[test]
    fn test_book_computes_fare_once() {
        let mut ledger = DispatchLedger::new();

        let BookingOutcome::Booked(booking) = ledger.book(103, &gjbc_to_oat()) else {
            panic!("expected a booking");
        };
        assert_eq!(format!("{:.2}", booking.fare), "19.60");
        assert_eq!(booking.driver_name, "Raj");
        assert_eq!(booking.distance_km, 2.0);

        let snapshot = ledger.units().to_vec();
        assert_eq!(ledger.book(103, &gjbc_to_oat()), BookingOutcome::AlreadyBooked);
        assert_eq!(ledger.units(), snapshot.as_slice());
    }

    #[test]
    fn test_unknown_unit_leaves_catalog_untouched() {
        let mut ledger = DispatchLedger::new();
        let snapshot = ledger.units().to_vec();

        for _ in 0..3 {
            assert_eq!(ledger.book(999, &gjbc_to_oat()), BookingOutcome::NotFound);
        }
        assert_eq!(ledger.units(), snapshot.as_slice());
    }

    #[test]
    fn test_availability_never_reverts() {
        let mut ledger = DispatchLedger::new();
        let trip = Trip::resolve("SKM", "BE BLOCK").unwrap();

        for id in [101, 101, 105, 101, 105] {
            ledger.book(id, &trip);
            let unit = ledger.units().iter().find(|u| u.id == 101).unwrap();
            assert!(!unit.available);
        }
        assert_eq!(ledger.list_available().len(), 3);
    }

    #[test]
    fn test_empty_when_all_booked() {
        let mut ledger = DispatchLedger::new();
        for id in 101..=105 {
            assert!(matches!(
                ledger.book(id, &gjbc_to_oat()),
                BookingOutcome::Booked(_)
            ));
        }
        assert!(ledger.list_available().is_empty());

        ledger.reset();
        assert_eq!(ledger.list_available().len(), 5);
    }
}
