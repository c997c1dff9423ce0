//! Condition-based waiting.
//!
//! The portal renders slowly and unevenly, so every step that depends
//! on an element polls for it instead of sleeping a fixed interval.

use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Polling budget for [`PortalDriver::wait_visible`].
///
/// [`PortalDriver::wait_visible`]: crate::driver::PortalDriver::wait_visible
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
	/// Total time to keep polling before giving up.
	pub timeout: Duration,
	/// Pause between lookups.
	pub poll_interval: Duration,
}

impl WaitConfig {
	/// Timeout in milliseconds, for error reporting.
	pub fn timeout_ms(&self) -> u64 {
		self.timeout.as_millis() as u64
	}
}

impl Default for WaitConfig {
	fn default() -> Self {
		Self {
			timeout: DEFAULT_TIMEOUT,
			poll_interval: DEFAULT_POLL_INTERVAL,
		}
	}
}
