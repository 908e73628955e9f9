//! Route Matching - interactive console

use clap::Parser;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_matching::config::AppConfig;
use route_matching::console::Reporter;
use route_matching::session::Session;
use route_matching::store::DataStore;

fn main() {
    let config = AppConfig::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = config.env_filter(rust_log.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(config.use_color())
        .init();

    let reporter = Reporter::new(config.use_color());
    print!("{}", reporter.render_banner());

    let store = if config.no_sample_data {
        DataStore::new()
    } else {
        let store = DataStore::with_sample_data();
        println!("Sample data loaded!");
        store
    };
    info!(format = ?config.format, "Starting session");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), store)
        .with_reporter(reporter)
        .with_format(config.format);
    if let Err(err) = session.run() {
        error!(error = %err, "Session ended on I/O error");
    }
}
