//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Default tracing directive when neither `RUST_LOG` nor `--log` is given.
pub const DEFAULT_LOG_DIRECTIVE: &str = "route_matching=warn";

/// How the match report is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable sections per route.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Interactive route-to-vehicle matching by lowest fuel cost.
#[derive(Clone, Debug, Parser)]
#[command(name = "route-matching", version, about)]
pub struct AppConfig {
    /// Start with empty route and vehicle lists.
    #[arg(long, env = "ROUTE_MATCHING_NO_SAMPLE_DATA")]
    pub no_sample_data: bool,

    /// Output format for best-match reports.
    #[arg(long, value_enum, default_value_t = ReportFormat::Table, env = "ROUTE_MATCHING_FORMAT")]
    pub format: ReportFormat,

    /// Disable ANSI colors. Setting `NO_COLOR` has the same effect.
    #[arg(long)]
    pub no_color: bool,

    /// Tracing directive used when `RUST_LOG` is unset, e.g. `route_matching=info`.
    #[arg(long = "log", default_value = DEFAULT_LOG_DIRECTIVE, env = "ROUTE_MATCHING_LOG")]
    pub log_directive: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            no_sample_data: false,
            format: ReportFormat::Table,
            no_color: false,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }

    /// Builds the log filter. A parseable `rust_log` (the `RUST_LOG` value)
    /// wins; otherwise `--log` applies, falling back to
    /// [`DEFAULT_LOG_DIRECTIVE`] if that does not parse.
    pub fn env_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        rust_log
            .and_then(|spec| EnvFilter::try_new(spec).ok())
            .or_else(|| EnvFilter::try_new(&self.log_directive).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn test_flags_parse() {
        let config =
            AppConfig::try_parse_from(["route-matching", "--no-sample-data", "--format", "json", "--no-color"])
                .unwrap();
        assert!(config.no_sample_data);
        assert_eq!(config.format, ReportFormat::Json);
        assert!(!config.use_color());
    }

    fn info_enabled(filter: EnvFilter) -> bool {
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::event_enabled!(target: "route_matching::store", tracing::Level::INFO)
        })
    }

    #[test]
    fn test_rust_log_raises_crate_level() {
        let config = AppConfig::default();
        assert!(info_enabled(config.env_filter(Some("route_matching=info"))));
    }

    #[test]
    fn test_default_filter_is_warn() {
        let config = AppConfig::default();
        assert!(!info_enabled(config.env_filter(None)));
        assert!(!info_enabled(config.env_filter(Some("route_matching=loudest"))));
    }

    #[test]
    fn test_log_flag_applies_without_rust_log() {
        let config = AppConfig::try_parse_from(["route-matching", "--log", "route_matching=debug"]).unwrap();
        assert!(info_enabled(config.env_filter(None)));
        assert!(!info_enabled(config.env_filter(Some("route_matching=error"))));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(AppConfig::try_parse_from(["route-matching", "--format", "xml"]).is_err());
    }
}
