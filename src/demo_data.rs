//! Sample routes and fleet loaded at startup.
//!
//! - Four routes between Indian cities, one of them (R4) heavy enough that
//!   only the largest truck can take it
//! - Two trucks and one van

use crate::domain::{Route, Vehicle, VehicleKind};

/// Route data with id, distance (km), cargo (kg) and endpoints.
struct RouteData {
    id: &'static str,
    distance: f64,
    cargo: f64,
    source: &'static str,
    destination: &'static str,
}

/// Vehicle data with kind, id, capacity (kg), mileage (km/L) and rate (/L).
struct VehicleData {
    kind: VehicleKind,
    id: &'static str,
    capacity: f64,
    mileage: f64,
    rate: f64,
}

const SAMPLE_ROUTES: &[RouteData] = &[
    RouteData { id: "R1", distance: 200.0, cargo: 100.0, source: "Delhi", destination: "Mumbai" },
    RouteData { id: "R2", distance: 350.0, cargo: 200.0, source: "Mumbai", destination: "Bangalore" },
    RouteData { id: "R3", distance: 80.0, cargo: 800.0, source: "Delhi", destination: "Kolkata" },
    RouteData { id: "R4", distance: 500.0, cargo: 1100.0, source: "Pune", destination: "Chennai" },
];

const SAMPLE_VEHICLES: &[VehicleData] = &[
    VehicleData { kind: VehicleKind::Truck, id: "T001", capacity: 1000.0, mileage: 8.5, rate: 95.0 },
    VehicleData { kind: VehicleKind::Van, id: "V001", capacity: 300.0, mileage: 15.0, rate: 92.0 },
    VehicleData { kind: VehicleKind::Truck, id: "T002", capacity: 1200.0, mileage: 7.0, rate: 98.0 },
];

/// Returns the sample routes in listing order.
///
/// ```
/// use route_matching::demo_data::sample_routes;
///
/// let routes = sample_routes();
/// assert_eq!(routes.len(), 4);
/// assert_eq!(routes[3].id, "R4");
/// ```
pub fn sample_routes() -> Vec<Route> {
    SAMPLE_ROUTES
        .iter()
        .map(|r| Route::new(r.id, r.distance, r.cargo, r.source, r.destination))
        .collect()
}

/// Returns the sample fleet in listing order.
pub fn sample_vehicles() -> Vec<Vehicle> {
    SAMPLE_VEHICLES
        .iter()
        .map(|v| Vehicle::new(v.kind, v.id, v.capacity, v.mileage, v.rate))
        .collect()
}
