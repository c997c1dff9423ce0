//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `-v` maps to info, `-vv` to debug; `RUST_LOG` overrides the flag
/// entirely when set.
pub fn init_logging(verbose: u8) {
	let default = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt().with_env_filter(filter).init();
}
