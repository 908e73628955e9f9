//! Route matching by lowest fuel cost
//!
//! Matches each shipping route to the delivery vehicle that drives it for the
//! least fuel money, among the vehicles whose capacity covers the cargo.
//!
//! # Domain Model
//!
//! - [`Route`](domain::Route): Shipment with distance, cargo and endpoints
//! - [`Vehicle`](domain::Vehicle): Truck or van with capacity, mileage and fuel rate
//! - [`DataStore`](store::DataStore): Append-only lists of both
//!
//! # Matching
//!
//! - **Capacity** (filter): a vehicle is eligible iff capacity >= cargo
//! - **Fuel cost** (objective): distance / mileage * rate, lowest wins
//! - **Runner-up**: second cheapest eligible vehicle, when there is one

pub mod config;
pub mod console;
pub mod demo_data;
pub mod domain;
pub mod error;
pub mod matcher;
pub mod session;
pub mod store;
