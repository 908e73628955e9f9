//! Domain model for route matching.
//!
//! # Overview
//!
//! - [`Route`]s: shipments with a distance and a cargo weight
//! - [`Vehicle`]s: fleet members with capacity, mileage and fuel rate
//! - [`VehicleKind`]: display variant of a vehicle (truck or van)
//!
//! Records are immutable once created. Identifiers are keys by convention
//! only: use [`Route::same_key`] / [`Vehicle::same_key`] where identity
//! matters instead of `==`.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A shipment between two locations.
///
/// # Examples
///
/// ```
/// use route_matching::domain::Route;
///
/// let route = Route::new("R1", 200.0, 100.0, "Delhi", "Mumbai");
/// assert_eq!(route.id, "R1");
/// assert_eq!(route.cargo, 100.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    /// Distance in kilometres.
    pub distance: f64,
    /// Cargo weight in kilograms.
    pub cargo: f64,
    pub source: String,
    pub destination: String,
}

impl Route {
    /// Creates a new route.
    pub fn new(
        id: impl Into<String>,
        distance: f64,
        cargo: f64,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            distance,
            cargo,
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Returns true if both routes carry the same identifier.
    ///
    /// ```
    /// use route_matching::domain::Route;
    ///
    /// let a = Route::new("R1", 200.0, 100.0, "Delhi", "Mumbai");
    /// let b = Route::new("R1", 10.0, 5.0, "Pune", "Goa");
    /// assert!(a.same_key(&b));
    /// ```
    pub fn same_key(&self, other: &Route) -> bool {
        self.id == other.id
    }
}

/// Vehicle variant. Only affects the display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Truck,
    Van,
}

impl VehicleKind {
    /// Maps user input to a variant: "truck" in any case is a truck,
    /// everything else is a van.
    ///
    /// ```
    /// use route_matching::domain::VehicleKind;
    ///
    /// assert_eq!(VehicleKind::from_label("TRUCK"), VehicleKind::Truck);
    /// assert_eq!(VehicleKind::from_label(" truck "), VehicleKind::Truck);
    /// assert_eq!(VehicleKind::from_label("lorry"), VehicleKind::Van);
    /// ```
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("truck") {
            VehicleKind::Truck
        } else {
            VehicleKind::Van
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Truck => "Truck",
            VehicleKind::Van => "Van",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A delivery vehicle.
///
/// # Examples
///
/// ```
/// use route_matching::domain::{Vehicle, VehicleKind};
///
/// let van = Vehicle::new(VehicleKind::Van, "V001", 300.0, 15.0, 92.0);
/// assert!(van.can_carry(300.0));
/// assert!(!van.can_carry(300.5));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    pub kind: VehicleKind,
    pub id: String,
    /// Maximum cargo in kilograms.
    pub capacity: f64,
    /// Kilometres per unit of fuel.
    pub mileage: f64,
    /// Cost per unit of fuel.
    pub rate: f64,
}

impl Vehicle {
    /// Creates a new vehicle.
    pub fn new(kind: VehicleKind, id: impl Into<String>, capacity: f64, mileage: f64, rate: f64) -> Self {
        Self {
            kind,
            id: id.into(),
            capacity,
            mileage,
            rate,
        }
    }

    /// Returns true if the vehicle can take `cargo` kilograms.
    #[inline]
    pub fn can_carry(&self, cargo: f64) -> bool {
        self.capacity >= cargo
    }

    /// Returns true if both vehicles carry the same identifier.
    pub fn same_key(&self, other: &Vehicle) -> bool {
        self.id == other.id
    }
}
