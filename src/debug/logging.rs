//! Console output for layout tracing.

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the filter directives.
pub const ENV_VAR: &str = "QLAYOUT_LOG";

const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Installs the console subscriber (idempotent).
///
/// Directives are read from `QLAYOUT_LOG`, falling back to `info`. Set
/// `QLAYOUT_LOG=qlayout_list=trace` to follow list caching and animation.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Installs the console subscriber with explicit `directives` (idempotent).
///
/// Invalid directives fall back to `info`.
pub fn init_with_filter(directives: &str) {
    let filter =
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

fn install(filter: EnvFilter) {
    TRACING_INSTALLED.call_once(|| {
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter);

        // Another subscriber may already be global; leave it in place.
        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("qlayout tracing subscriber failed to initialize");
        }
    });
}
