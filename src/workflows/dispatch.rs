//! Scooter dispatch workflow

use crate::audit::{AuditEntry, AuditEvent};
use crate::display::{format_available_units, format_booking, format_routes};
use crate::error::PesBuddyResult;
use crate::models::{Trip, ROUTES};
use crate::prompt::Prompt;
use crate::services::BookingOutcome;

use super::Session;

/// Run the booking menu until the user exits back to the main menu
///
/// The fleet is restored to fully available every time the workflow starts.
pub fn run<P: Prompt>(io: &mut P, session: &mut Session<'_>) -> PesBuddyResult<()> {
    session.dispatch.reset();
    io.say("\nWelcome to PES Scootigo!")?;

    loop {
        io.say("\n=== Scooter Booking System ===")?;
        io.say("1. Display Available Scooters\n2. Book a Scooter\n3. Exit")?;

        match io.read_int("Enter your choice: ")? {
            1 => {
                let listing = format_available_units(&session.dispatch.list_available());
                io.say(listing.trim_end())?;
            }
            2 => book(io, session)?,
            3 => {
                io.say("Exiting to Main Menu...")?;
                return Ok(());
            }
            _ => io.say("Invalid choice! Please try again.")?,
        }
    }
}

fn book<P: Prompt>(io: &mut P, session: &mut Session<'_>) -> PesBuddyResult<()> {
    io.say(format_routes().trim_end())?;
    io.say("\nEnter your choice for Pickup and Destination:")?;
    let choice = io.read_int(
        "Enter the number corresponding to the Pickup and Destination (e.g., 1 for GJBC <-> OAT): ",
    )?;

    let route = usize::try_from(choice)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| ROUTES.get(index));
    let Some(route) = route else {
        io.say("Invalid choice!")?;
        return Ok(());
    };

    let Some(trip) = Trip::resolve(route.point_a, route.point_b) else {
        io.say("Invalid pickup or destination location.")?;
        return Ok(());
    };

    let listing = format_available_units(&session.dispatch.list_available());
    io.say(listing.trim_end())?;

    let requested = io.read_int("\nEnter Scooter ID to book: ")?;
    let outcome = match u32::try_from(requested) {
        Ok(unit_id) => session.dispatch.book(unit_id, &trip),
        Err(_) => BookingOutcome::NotFound,
    };

    match outcome {
        BookingOutcome::Booked(booking) => {
            io.say(&format!("Scooter {} booked successfully!", booking.unit_id))?;
            io.say(format_booking(&booking).trim_end())?;
            session.storage.record(
                AuditEntry::new(AuditEvent::ScooterBooked, Some(session.user.as_str()))
                    .with_detail(&booking),
            );
        }
        BookingOutcome::AlreadyBooked => {
            io.say(&format!("Scooter {} is already booked.", requested))?;
        }
        BookingOutcome::NotFound => io.say("Invalid Scooter ID. Please try again.")?,
    }
    Ok(())
}
