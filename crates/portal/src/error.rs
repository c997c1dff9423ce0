//! Error types shared across the portal workflow.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortalError>;

/// Failures raised while driving the portal.
///
/// Everything except notification propagates to the request boundary;
/// the caller decides how to surface it.
#[derive(Debug, Error)]
pub enum PortalError {
	/// The browser session could not be started.
	#[error("failed to start browser session: {0}")]
	Session(String),

	/// Navigation to a page failed outright.
	#[error("navigation to {url} failed: {source}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	/// A selector matched nothing.
	#[error("element not found: {selector}")]
	ElementNotFound { selector: String },

	/// An element did not appear within the polling budget.
	#[error("timed out after {ms}ms waiting for {condition}")]
	Timeout { ms: u64, condition: String },

	/// The slot letter was not a single ASCII letter.
	#[error("slot letter must be a single ASCII letter, got {input:?}")]
	InvalidSlot { input: String },

	/// A vacancy badge did not parse as an integer.
	#[error("vacancy badge is not a number: {value:?}")]
	BadVacancyCount { value: String },

	/// Any other driver-level failure.
	#[error("driver error: {0}")]
	Driver(String),
}

impl From<thirtyfour::error::WebDriverError> for PortalError {
	fn from(err: thirtyfour::error::WebDriverError) -> Self {
		PortalError::Driver(err.to_string())
	}
}
