//! Scooter dispatch models
//!
//! Scooter units, the static campus route table, resolved trips and the
//! booking receipt produced when a unit is dispatched.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BookingId;

/// A dispatchable scooter with its driver and fare rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScooterUnit {
    pub id: u32,
    pub driver_name: String,
    pub available: bool,
    pub fare_per_km: f64,
}

impl ScooterUnit {
    /// Create an available unit
    pub fn new(id: u32, driver_name: impl Into<String>, fare_per_km: f64) -> Self {
        Self {
            id,
            driver_name: driver_name.into(),
            available: true,
            fare_per_km,
        }
    }

    /// The five units every dispatch session starts with
    pub fn default_fleet() -> Vec<ScooterUnit> {
        vec![
            ScooterUnit::new(101, "Rahul", 10.0),
            ScooterUnit::new(102, "Kishan", 12.5),
            ScooterUnit::new(103, "Raj", 9.8),
            ScooterUnit::new(104, "Deepak", 9.0),
            ScooterUnit::new(105, "Ravi", 15.0),
        ]
    }
}

impl fmt::Display for ScooterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scooter ID: {}, Driver: {}, Fare: {:.2} per km",
            self.id, self.driver_name, self.fare_per_km
        )
    }
}

/// An undirected route between two campus locations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub point_a: &'static str,
    pub point_b: &'static str,
    pub distance_km: f64,
}

impl Route {
    /// Check whether this route joins the two points, in either direction
    pub fn connects(&self, from: &str, to: &str) -> bool {
        (self.point_a == from && self.point_b == to) || (self.point_a == to && self.point_b == from)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.point_a, self.point_b)
    }
}

/// The campus route table
pub const ROUTES: [Route; 3] = [
    Route {
        point_a: "GJBC",
        point_b: "OAT",
        distance_km: 2.0,
    },
    Route {
        point_a: "SKM",
        point_b: "BE BLOCK",
        distance_km: 3.0,
    },
    Route {
        point_a: "MRD BLOCK",
        point_b: "F BLOCK",
        distance_km: 2.0,
    },
];

/// Look up the distance between two locations
///
/// Matching is exact and case-sensitive, and symmetric in its arguments.
pub fn resolve_route(pickup: &str, destination: &str) -> Option<f64> {
    ROUTES
        .iter()
        .find(|route| route.connects(pickup, destination))
        .map(|route| route.distance_km)
}

/// A pickup/destination pair whose distance has been resolved
///
/// A trip can only be built through [`Trip::resolve`], so holding one proves
/// the route lookup succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pickup: String,
    destination: String,
    distance_km: f64,
}

impl Trip {
    /// Resolve a trip, or `None` for an unknown location pair
    pub fn resolve(pickup: &str, destination: &str) -> Option<Self> {
        resolve_route(pickup, destination).map(|distance_km| Self {
            pickup: pickup.to_string(),
            destination: destination.to_string(),
            distance_km,
        })
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// Receipt for a dispatched scooter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub unit_id: u32,
    pub driver_name: String,
    pub pickup: String,
    pub destination: String,
    pub distance_km: f64,
    pub fare_per_km: f64,
    pub fare: f64,
}
