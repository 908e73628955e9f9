//! In-memory storage for routes and vehicles.
//!
//! [`DataStore`] is owned by the console session for the lifetime of the
//! program. [`SharedStore`] wraps it in a lock for callers that share it
//! across threads.

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::demo_data::{sample_routes, sample_vehicles};
use crate::domain::{Route, Vehicle, VehicleKind};
use crate::matcher::{run_matching_pass, RouteMatch};

/// Append-only lists of routes and vehicles.
///
/// # Examples
///
/// ```
/// use route_matching::domain::VehicleKind;
/// use route_matching::store::DataStore;
///
/// let mut store = DataStore::new();
/// store.add_route("R1", 200.0, 100.0, "Delhi", "Mumbai");
/// store.add_vehicle(VehicleKind::Van, "V001", 300.0, 15.0, 92.0);
///
/// let results = store.run_matching_pass();
/// assert_eq!(results[0].best().unwrap().vehicle_id, "V001");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DataStore {
    routes: Vec<Route>,
    vehicles: Vec<Vehicle>,
}

impl DataStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the sample routes and fleet.
    pub fn with_sample_data() -> Self {
        let store = Self {
            routes: sample_routes(),
            vehicles: sample_vehicles(),
        };
        info!(
            routes = store.routes.len(),
            vehicles = store.vehicles.len(),
            "Sample data loaded"
        );
        store
    }

    /// Appends a route. Values and identifier are taken as given.
    pub fn add_route(
        &mut self,
        id: impl Into<String>,
        distance: f64,
        cargo: f64,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> &Route {
        let route = Route::new(id, distance, cargo, source, destination);
        if self.routes.iter().any(|r| r.same_key(&route)) {
            warn!(route_id = %route.id, "Duplicate route id");
        }
        info!(route_id = %route.id, distance, cargo, "Route added");
        self.routes.push(route);
        &self.routes[self.routes.len() - 1]
    }

    /// Appends a vehicle. Values and identifier are taken as given.
    pub fn add_vehicle(
        &mut self,
        kind: VehicleKind,
        id: impl Into<String>,
        capacity: f64,
        mileage: f64,
        rate: f64,
    ) -> &Vehicle {
        let vehicle = Vehicle::new(kind, id, capacity, mileage, rate);
        if self.vehicles.iter().any(|v| v.same_key(&vehicle)) {
            warn!(vehicle_id = %vehicle.id, "Duplicate vehicle id");
        }
        info!(vehicle_id = %vehicle.id, kind = %kind, capacity, mileage, rate, "Vehicle added");
        self.vehicles.push(vehicle);
        &self.vehicles[self.vehicles.len() - 1]
    }

    /// Routes in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Vehicles in insertion order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Matches every stored route against the stored fleet.
    pub fn run_matching_pass(&self) -> Vec<RouteMatch> {
        run_matching_pass(&self.routes, &self.vehicles)
    }
}

/// A [`DataStore`] behind a single lock.
///
/// Every method holds the lock for the whole operation, so a matching pass
/// never sees a half-applied add.
#[derive(Debug, Default)]
pub struct SharedStore {
    inner: Mutex<DataStore>,
}

impl SharedStore {
    pub fn new(store: DataStore) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    pub fn add_route(
        &self,
        id: impl Into<String>,
        distance: f64,
        cargo: f64,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Route {
        self.inner
            .lock()
            .add_route(id, distance, cargo, source, destination)
            .clone()
    }

    pub fn add_vehicle(
        &self,
        kind: VehicleKind,
        id: impl Into<String>,
        capacity: f64,
        mileage: f64,
        rate: f64,
    ) -> Vehicle {
        self.inner
            .lock()
            .add_vehicle(kind, id, capacity, mileage, rate)
            .clone()
    }

    /// Copies of both lists taken under one lock.
    pub fn snapshot(&self) -> (Vec<Route>, Vec<Vehicle>) {
        let guard = self.inner.lock();
        (guard.routes().to_vec(), guard.vehicles().to_vec())
    }

    pub fn run_matching_pass(&self) -> Vec<RouteMatch> {
        self.inner.lock().run_matching_pass()
    }

    /// Returns the wrapped store.
    pub fn into_inner(self) -> DataStore {
        self.inner.into_inner()
    }
}
