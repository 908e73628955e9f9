//! Colorful console output for inventory and match reports.
//!
//! Every renderer returns a `String`; the session decides where it goes.

use num_format::{Locale, ToFormattedString};
use owo_colors::{OwoColorize, Style};
use std::fmt::{self, Write as _};

use crate::domain::{Route, Vehicle};
use crate::matcher::{MatchOutcome, MatchSummary, RouteMatch};

const ROUTE_RULE_WIDTH: usize = 57;
const VEHICLE_RULE_WIDTH: usize = 46;

/// Renders store contents and matching results as text tables.
#[derive(Clone, Copy, Debug)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A reporter that never emits ANSI escapes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: impl fmt::Display, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Startup banner with the crate version.
    pub fn render_banner(&self) -> String {
        format!(
            "{}\n  {}\n",
            self.paint("=== Transport Logistics System ===", Style::new().cyan().bold()),
            self.paint(format!("v{}", env!("CARGO_PKG_VERSION")), Style::new().bright_black()),
        )
    }

    /// Routes and vehicles as two tables, in listing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_matching::console::Reporter;
    /// use route_matching::demo_data::{sample_routes, sample_vehicles};
    ///
    /// let text = Reporter::plain().render_inventory(&sample_routes(), &sample_vehicles());
    /// assert!(text.contains("R1    | Delhi      -> Mumbai     | 200.0    | 100.0"));
    /// assert!(text.contains("V001  | Van      | 300.0    | 15.0     | 92.0"));
    /// ```
    pub fn render_inventory(&self, routes: &[Route], vehicles: &[Vehicle]) -> String {
        let heading = Style::new().bold();
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", self.paint("Routes:", heading));
        let _ = writeln!(
            out,
            "{:<5} | {:<10} -> {:<10} | {:<8} | {:<8}",
            "ID", "Source", "Dest", "Distance", "Cargo"
        );
        let _ = writeln!(out, "{}", "-".repeat(ROUTE_RULE_WIDTH));
        for r in routes {
            let _ = writeln!(
                out,
                "{:<5} | {:<10} -> {:<10} | {:<8.1} | {:<8.1}",
                r.id, r.source, r.destination, r.distance, r.cargo
            );
        }

        let _ = writeln!(out, "\n{}", self.paint("Vehicles:", heading));
        let _ = writeln!(
            out,
            "{:<5} | {:<8} | {:<8} | {:<8} | {:<8}",
            "ID", "Type", "Capacity", "Mileage", "Rate/L"
        );
        let _ = writeln!(out, "{}", "-".repeat(VEHICLE_RULE_WIDTH));
        for v in vehicles {
            let _ = writeln!(
                out,
                "{:<5} | {:<8} | {:<8.1} | {:<8.1} | {:<8.1}",
                v.id,
                v.kind.label(),
                v.capacity,
                v.mileage,
                v.rate
            );
        }

        out
    }

    /// One section per route with best and next best match, then a summary.
    pub fn render_matches(&self, results: &[RouteMatch]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n{}",
            self.paint("=== Route Planning (Best Match) ===", Style::new().cyan().bold())
        );

        for result in results {
            let _ = writeln!(out, "---");
            let _ = writeln!(
                out,
                "Route {} ({} -> {} | Cargo: {:.1} kg)",
                self.paint(&result.route_id, Style::new().bold()),
                result.source,
                result.destination,
                result.cargo
            );

            match &result.outcome {
                MatchOutcome::NoEligibleVehicle => {
                    let _ = writeln!(
                        out,
                        "  > {}: No vehicle has sufficient capacity for this route.",
                        self.paint("ERROR", Style::new().bright_red().bold())
                    );
                }
                MatchOutcome::Matched { best, next_best } => {
                    let _ = writeln!(
                        out,
                        "  > Best Match: {} ({})",
                        self.paint(&best.vehicle_id, Style::new().bright_green().bold()),
                        best.kind
                    );
                    let _ = writeln!(
                        out,
                        "  > Total Cost: {}",
                        self.paint(format!("${:.2}", best.cost), Style::new().yellow())
                    );
                    let _ = writeln!(out, "  > Surplus Capacity: {:.1} kg", best.surplus_capacity);
                    if let Some(next) = next_best {
                        let _ = writeln!(
                            out,
                            "  > Next Best Match: {} (Cost: ${:.2})",
                            next.vehicle_id, next.cost
                        );
                    }
                }
            }

            for skipped in &result.skipped {
                let _ = writeln!(
                    out,
                    "  > {}: {}",
                    self.paint("WARNING", Style::new().yellow()),
                    skipped.reason
                );
            }
        }

        out.push_str(&self.render_summary(&MatchSummary::from_results(results)));
        out
    }

    fn render_summary(&self, summary: &MatchSummary) -> String {
        let unmatched = if summary.unmatched > 0 {
            self.paint(
                summary.unmatched.to_formatted_string(&Locale::en),
                Style::new().bright_red(),
            )
        } else {
            summary.unmatched.to_formatted_string(&Locale::en)
        };
        format!(
            "===\nMatched {} of {} routes ({} without a vehicle), total best cost {}\n",
            self.paint(
                summary.matched.to_formatted_string(&Locale::en),
                Style::new().bright_green()
            ),
            summary.routes.to_formatted_string(&Locale::en),
            unmatched,
            self.paint(format_money(summary.total_cost), Style::new().bright_magenta()),
        )
    }
}

/// Pretty-printed JSON of a matching pass.
pub fn render_matches_json(results: &[RouteMatch]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Formats an amount as dollars with grouped thousands.
///
/// ```
/// use route_matching::console::format_money;
///
/// assert_eq!(format_money(12345.678), "$12,345.68");
/// assert_eq!(format_money(0.5), "$0.50");
/// assert_eq!(format_money(-1000.0), "-$1,000.00");
/// ```
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{}${}.{:02}",
        sign,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}
