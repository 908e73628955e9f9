//! Error types for cost evaluation and the console session.

use std::io;

/// Reasons a (route, vehicle) pair cannot be priced.
///
/// These are reported per candidate: the vehicle is left out of the match
/// for that route and the pass carries on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CostError {
    #[error("vehicle {vehicle_id} has non-positive mileage {mileage}")]
    NonPositiveMileage { vehicle_id: String, mileage: f64 },
    #[error("vehicle {vehicle_id} has negative fuel rate {rate}")]
    NegativeRate { vehicle_id: String, rate: f64 },
    #[error("cost for vehicle {vehicle_id} is not a finite number")]
    NonFinite { vehicle_id: String },
}

impl CostError {
    /// Identifier of the vehicle the error was raised for.
    pub fn vehicle_id(&self) -> &str {
        match self {
            CostError::NonPositiveMileage { vehicle_id, .. }
            | CostError::NegativeRate { vehicle_id, .. }
            | CostError::NonFinite { vehicle_id } => vehicle_id,
        }
    }
}

/// Failures while reading from the interactive input stream.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}
