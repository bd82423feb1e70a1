// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Call [`init`] once at the start of `main`. `RUST_LOG` replaces the
//! default filter entirely when set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,wgpu_hal=warn,wgpu_core=warn,naga=warn";
const VERBOSE_FILTER: &str = "debug,wgpu_hal=warn,wgpu_core=warn,naga=warn,cosmic_text=warn";

/// Builds the filter from `RUST_LOG`, falling back to the built-in default.
fn filter(rust_log: Option<String>, verbose: bool) -> EnvFilter {
    match rust_log.filter(|value| !value.trim().is_empty()) {
        Some(value) => EnvFilter::new(value),
        None if verbose => EnvFilter::new(VERBOSE_FILTER),
        None => EnvFilter::new(DEFAULT_FILTER),
    }
}

/// Installs the global subscriber writing to stderr.
///
/// `verbose` lowers the default level to debug. A second call is ignored.
pub fn init(verbose: bool) {
    let env_filter = filter(std::env::var("RUST_LOG").ok(), verbose);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_info() {
        let filter = filter(None, false).to_string();
        assert!(filter.contains("info"));
        assert!(filter.contains("wgpu_core=warn"));
    }

    #[test]
    fn verbose_lowers_default_level() {
        let filter = filter(None, true).to_string();
        assert!(filter.contains("debug"));
        assert!(filter.contains("naga=warn"));
    }

    #[test]
    fn rust_log_overrides_default() {
        let filter = filter(Some("iced_greeting=trace".to_string()), false);
        assert_eq!(filter.to_string(), "iced_greeting=trace");
    }

    #[test]
    fn blank_rust_log_is_ignored() {
        let filter = filter(Some("  ".to_string()), false).to_string();
        assert!(filter.contains("info"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
