//! Lowest fuel cost matching of routes to vehicles.
//!
//! For every route the matcher keeps the vehicles whose capacity covers the
//! cargo, prices each one with [`fuel_cost`] and keeps the two cheapest in a
//! single pass. Equal costs keep enumeration order: the vehicle listed first
//! wins, for the best match and for the runner-up alike.

use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

use crate::domain::{Route, Vehicle, VehicleKind};
use crate::error::CostError;

/// Fuel cost of driving `route` with `vehicle`.
///
/// `cost = distance / mileage * rate`
///
/// # Examples
///
/// ```
/// use route_matching::domain::{Route, Vehicle, VehicleKind};
/// use route_matching::matcher::fuel_cost;
///
/// let route = Route::new("R4", 500.0, 1100.0, "Pune", "Chennai");
/// let truck = Vehicle::new(VehicleKind::Truck, "T002", 1200.0, 7.0, 98.0);
/// let cost = fuel_cost(&route, &truck).unwrap();
/// assert!((cost - 7000.0).abs() < 1e-9);
///
/// let broken = Vehicle::new(VehicleKind::Van, "V9", 300.0, 0.0, 92.0);
/// assert!(fuel_cost(&route, &broken).is_err());
/// ```
pub fn fuel_cost(route: &Route, vehicle: &Vehicle) -> Result<f64, CostError> {
    // Written as negated comparisons so NaN is rejected too.
    if !(vehicle.mileage > 0.0) {
        return Err(CostError::NonPositiveMileage {
            vehicle_id: vehicle.id.clone(),
            mileage: vehicle.mileage,
        });
    }
    if !(vehicle.rate >= 0.0) {
        return Err(CostError::NegativeRate {
            vehicle_id: vehicle.id.clone(),
            rate: vehicle.rate,
        });
    }

    let fuel_needed = route.distance / vehicle.mileage;
    let cost = fuel_needed * vehicle.rate;
    if !cost.is_finite() {
        return Err(CostError::NonFinite {
            vehicle_id: vehicle.id.clone(),
        });
    }
    Ok(cost)
}

/// Cheapest eligible vehicle for a route.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestMatch {
    pub vehicle_id: String,
    pub kind: VehicleKind,
    pub cost: f64,
    /// Vehicle capacity left over after loading the cargo.
    pub surplus_capacity: f64,
}

/// Second cheapest eligible vehicle for a route.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerUp {
    pub vehicle_id: String,
    pub cost: f64,
}

/// Outcome of matching a single route.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum MatchOutcome {
    #[serde(rename_all = "camelCase")]
    Matched {
        best: BestMatch,
        #[serde(skip_serializing_if = "Option::is_none")]
        next_best: Option<RunnerUp>,
    },
    /// No vehicle has enough capacity (or every candidate was skipped).
    NoEligibleVehicle,
}

/// A capacity-eligible vehicle left out because it could not be priced.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedVehicle {
    pub vehicle_id: String,
    pub reason: String,
}

impl From<CostError> for SkippedVehicle {
    fn from(err: CostError) -> Self {
        Self {
            vehicle_id: err.vehicle_id().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Matching result for one route.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMatch {
    pub route_id: String,
    pub source: String,
    pub destination: String,
    pub cargo: f64,
    #[serde(flatten)]
    pub outcome: MatchOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedVehicle>,
}

impl RouteMatch {
    /// Returns the best match, if any vehicle was eligible.
    pub fn best(&self) -> Option<&BestMatch> {
        match &self.outcome {
            MatchOutcome::Matched { best, .. } => Some(best),
            MatchOutcome::NoEligibleVehicle => None,
        }
    }

    /// Returns the runner-up, if at least two vehicles were eligible.
    pub fn next_best(&self) -> Option<&RunnerUp> {
        match &self.outcome {
            MatchOutcome::Matched { next_best, .. } => next_best.as_ref(),
            MatchOutcome::NoEligibleVehicle => None,
        }
    }
}

/// Matches a single route against the fleet.
///
/// # Examples
///
/// ```
/// use route_matching::domain::{Route, Vehicle, VehicleKind};
/// use route_matching::matcher::{match_route, MatchOutcome};
///
/// let fleet = vec![Vehicle::new(VehicleKind::Van, "V001", 300.0, 15.0, 92.0)];
/// let heavy = Route::new("R3", 80.0, 800.0, "Delhi", "Kolkata");
///
/// let result = match_route(&heavy, &fleet);
/// assert_eq!(result.outcome, MatchOutcome::NoEligibleVehicle);
/// ```
pub fn match_route(route: &Route, vehicles: &[Vehicle]) -> RouteMatch {
    let mut best: Option<(f64, &Vehicle)> = None;
    let mut next: Option<(f64, &Vehicle)> = None;
    let mut skipped = Vec::new();

    for vehicle in vehicles.iter().filter(|v| v.can_carry(route.cargo)) {
        let cost = match fuel_cost(route, vehicle) {
            Ok(cost) => cost,
            Err(err) => {
                warn!(route_id = %route.id, vehicle_id = %vehicle.id, error = %err, "Skipping vehicle");
                skipped.push(SkippedVehicle::from(err));
                continue;
            }
        };

        match best {
            Some((best_cost, _)) if cost >= best_cost => {
                if next.map_or(true, |(next_cost, _)| cost < next_cost) {
                    next = Some((cost, vehicle));
                }
            }
            _ => {
                next = best;
                best = Some((cost, vehicle));
            }
        }
    }

    let outcome = match best {
        None => MatchOutcome::NoEligibleVehicle,
        Some((cost, vehicle)) => MatchOutcome::Matched {
            best: BestMatch {
                vehicle_id: vehicle.id.clone(),
                kind: vehicle.kind,
                cost,
                surplus_capacity: vehicle.capacity - route.cargo,
            },
            next_best: next.map(|(cost, vehicle)| RunnerUp {
                vehicle_id: vehicle.id.clone(),
                cost,
            }),
        },
    };

    RouteMatch {
        route_id: route.id.clone(),
        source: route.source.clone(),
        destination: route.destination.clone(),
        cargo: route.cargo,
        outcome,
        skipped,
    }
}

/// Matches every route, in listing order, against the whole fleet.
///
/// Recomputed from scratch on each call; nothing is cached.
pub fn run_matching_pass(routes: &[Route], vehicles: &[Vehicle]) -> Vec<RouteMatch> {
    let start = Instant::now();
    let results: Vec<RouteMatch> = routes.iter().map(|route| match_route(route, vehicles)).collect();

    info!(
        routes = routes.len(),
        vehicles = vehicles.len(),
        matched = results.iter().filter(|r| r.best().is_some()).count(),
        duration_us = start.elapsed().as_micros() as u64,
        "Matching pass complete"
    );

    results
}

/// Totals over a matching pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub routes: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Sum of best-match costs over matched routes.
    pub total_cost: f64,
}

impl MatchSummary {
    pub fn from_results(results: &[RouteMatch]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.routes += 1;
            match result.best() {
                Some(best) => {
                    summary.matched += 1;
                    summary.total_cost += best.cost;
                }
                None => summary.unmatched += 1,
            }
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_data::{sample_routes, sample_vehicles};
    use approx::assert_abs_diff_eq;

    fn truck(id: &str, capacity: f64, mileage: f64, rate: f64) -> Vehicle {
        Vehicle::new(VehicleKind::Truck, id, capacity, mileage, rate)
    }

    #[test]
    fn test_cost_formula_and_monotonicity() {
        let short = Route::new("A", 100.0, 0.0, "x", "y");
        let long = Route::new("B", 200.0, 0.0, "x", "y");
        let base = truck("T", 10.0, 10.0, 2.0);
        let thirsty = truck("T", 10.0, 5.0, 2.0);
        let pricey = truck("T", 10.0, 10.0, 3.0);

        let base_cost = fuel_cost(&short, &base).unwrap();
        assert_abs_diff_eq!(base_cost, 20.0, epsilon = 1e-9);
        assert!(fuel_cost(&long, &base).unwrap() >= base_cost);
        assert!(fuel_cost(&short, &pricey).unwrap() >= base_cost);
        assert!(fuel_cost(&short, &thirsty).unwrap() >= base_cost);
    }

    #[test]
    fn test_degenerate_vehicles_rejected() {
        let route = Route::new("R", 100.0, 10.0, "x", "y");

        let zero = fuel_cost(&route, &truck("Z", 50.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(
            zero,
            CostError::NonPositiveMileage {
                vehicle_id: "Z".into(),
                mileage: 0.0
            }
        );
        assert!(matches!(
            fuel_cost(&route, &truck("N", 50.0, -3.0, 1.0)),
            Err(CostError::NonPositiveMileage { .. })
        ));
        assert!(matches!(
            fuel_cost(&route, &truck("Q", 50.0, f64::NAN, 1.0)),
            Err(CostError::NonPositiveMileage { .. })
        ));
        assert!(matches!(
            fuel_cost(&route, &truck("R", 50.0, 5.0, -1.0)),
            Err(CostError::NegativeRate { .. })
        ));
        assert_eq!(fuel_cost(&route, &truck("F", 50.0, 5.0, 0.0)), Ok(0.0));

        let endless = Route::new("E", f64::INFINITY, 10.0, "x", "y");
        assert!(matches!(
            fuel_cost(&endless, &truck("T", 50.0, 5.0, 1.0)),
            Err(CostError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_scenario_a_best_and_next_best() {
        let routes = sample_routes();
        let fleet = sample_vehicles();
        let result = match_route(&routes[0], &fleet);

        let best = result.best().unwrap();
        assert_eq!(best.vehicle_id, "V001");
        assert_eq!(best.kind, VehicleKind::Van);
        assert_abs_diff_eq!(best.cost, 1226.6667, epsilon = 1e-3);
        assert_abs_diff_eq!(best.surplus_capacity, 200.0);

        let next = result.next_best().unwrap();
        assert_eq!(next.vehicle_id, "T001");
        assert_abs_diff_eq!(next.cost, 2235.2941, epsilon = 1e-3);
    }

    #[test]
    fn test_scenario_b_single_candidate() {
        let routes = sample_routes();
        let fleet = sample_vehicles();
        let result = match_route(&routes[3], &fleet);

        let best = result.best().unwrap();
        assert_eq!(best.vehicle_id, "T002");
        assert_abs_diff_eq!(best.cost, 7000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.surplus_capacity, 100.0);
        assert!(result.next_best().is_none());
    }

    #[test]
    fn test_scenario_c_no_eligible_vehicle() {
        let fleet = sample_vehicles();
        let route = Route::new("R9", 10.0, 5000.0, "Agra", "Jaipur");
        let result = match_route(&route, &fleet);
        assert_eq!(result.outcome, MatchOutcome::NoEligibleVehicle);
        assert!(result.skipped.is_empty());

        let empty = match_route(&route, &[]);
        assert_eq!(empty.outcome, MatchOutcome::NoEligibleVehicle);
    }

    #[test]
    fn test_best_is_minimum_over_candidates() {
        let routes = sample_routes();
        let fleet = sample_vehicles();
        for result in run_matching_pass(&routes, &fleet) {
            let route = routes.iter().find(|r| r.id == result.route_id).unwrap();
            let Some(best) = result.best() else { continue };
            for vehicle in fleet.iter().filter(|v| v.can_carry(route.cargo)) {
                assert!(best.cost <= fuel_cost(route, vehicle).unwrap());
            }
            if let Some(next) = result.next_best() {
                assert!(best.cost <= next.cost);
            }
        }
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        let route = Route::new("R", 100.0, 10.0, "x", "y");
        let fleet = vec![
            truck("A", 50.0, 10.0, 5.0),
            truck("B", 50.0, 10.0, 5.0),
            truck("C", 50.0, 10.0, 5.0),
        ];
        let result = match_route(&route, &fleet);
        assert_eq!(result.best().unwrap().vehicle_id, "A");
        assert_eq!(result.next_best().unwrap().vehicle_id, "B");
    }

    #[test]
    fn test_runner_up_found_after_best() {
        // Runner-up appears before the best and must survive the replacement.
        let route = Route::new("R", 100.0, 10.0, "x", "y");
        let fleet = vec![
            truck("EXPENSIVE", 50.0, 1.0, 10.0),
            truck("MID", 50.0, 10.0, 10.0),
            truck("CHEAP", 50.0, 20.0, 10.0),
        ];
        let result = match_route(&route, &fleet);
        assert_eq!(result.best().unwrap().vehicle_id, "CHEAP");
        assert_eq!(result.next_best().unwrap().vehicle_id, "MID");
    }

    #[test]
    fn test_degenerate_vehicle_skipped_not_fatal() {
        let route = Route::new("R", 100.0, 10.0, "x", "y");
        let fleet = vec![truck("BROKEN", 50.0, 0.0, 5.0), truck("OK", 50.0, 10.0, 5.0)];
        let result = match_route(&route, &fleet);

        assert_eq!(result.best().unwrap().vehicle_id, "OK");
        assert!(result.next_best().is_none());
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].vehicle_id, "BROKEN");

        let only_broken = match_route(&route, &fleet[..1]);
        assert_eq!(only_broken.outcome, MatchOutcome::NoEligibleVehicle);
        assert_eq!(only_broken.skipped.len(), 1);
    }

    #[test]
    fn test_pass_is_idempotent() {
        let routes = sample_routes();
        let fleet = sample_vehicles();
        let first = run_matching_pass(&routes, &fleet);
        let second = run_matching_pass(&routes, &fleet);
        assert_eq!(first, second);
        assert_eq!(first.len(), routes.len());
        for (route, result) in routes.iter().zip(&first) {
            assert_eq!(route.id, result.route_id);
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut routes = sample_routes();
        routes.push(Route::new("R9", 10.0, 5000.0, "Agra", "Jaipur"));
        let results = run_matching_pass(&routes, &sample_vehicles());
        let summary = MatchSummary::from_results(&results);

        assert_eq!(summary.routes, 5);
        assert_eq!(summary.unmatched, 1);
        assert_eq!(summary.matched, 4);
        let expected: f64 = results.iter().filter_map(|r| r.best()).map(|b| b.cost).sum();
        assert_abs_diff_eq!(summary.total_cost, expected);
    }
}
