//! Scooter dispatch formatting

use crate::models::{Booking, ScooterUnit, ROUTES};

/// Format the list of units that can be booked
pub fn format_available_units(units: &[&ScooterUnit]) -> String {
    let mut output = String::from("\nAvailable Scooters:\n");
    if units.is_empty() {
        output.push_str("No scooters available at the moment.\n");
        return output;
    }
    for unit in units {
        output.push_str(&format!("{}\n", unit));
    }
    output
}

/// Format the numbered route table
pub fn format_routes() -> String {
    let mut output = String::from("\nAvailable Pickup and Destination Locations:\n");
    for (index, route) in ROUTES.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, route));
    }
    output
}

/// Format a booking receipt
pub fn format_booking(booking: &Booking) -> String {
    format!(
        "\nBooking Details:\n\
         Booking Reference: {}\n\
         Driver: {}\n\
         Pickup Location: {}\n\
         Destination: {}\n\
         Distance: {:.2} km\n\
         Total Fare: {:.2}\n",
        booking.id,
        booking.driver_name,
        booking.pickup,
        booking.destination,
        booking.distance_km,
        booking.fare
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingId;

    #[test]
    fn test_empty_list_message() {
        let text = format_available_units(&[]);
        assert!(text.contains("No scooters available at the moment."));
    }

    #[test]
    fn test_list_and_routes() {
        let fleet = ScooterUnit::default_fleet();
        let units: Vec<&ScooterUnit> = fleet.iter().take(2).collect();
        let text = format_available_units(&units);
        assert!(text.contains("Scooter ID: 101, Driver: Rahul, Fare: 10.00 per km"));
        assert!(!text.contains("103"));

        let routes = format_routes();
        assert!(routes.contains("1. GJBC <-> OAT"));
        assert!(routes.contains("3. MRD BLOCK <-> F BLOCK"));
    }

    #[test]
    fn test_booking_receipt() {
        let booking = Booking {
            id: BookingId::new(),
            unit_id: 103,
            driver_name: "Raj".into(),
            pickup: "GJBC".into(),
            destination: "OAT".into(),
            distance_km: 2.0,
            fare_per_km: 9.8,
            fare: 9.8 * 2.0,
        };
        let text = format_booking(&booking);
        assert!(text.contains("Distance: 2.00 km"));
        assert!(text.contains("Total Fare: 19.60"));
    }
}
