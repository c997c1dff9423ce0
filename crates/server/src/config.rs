//! Process configuration, loaded once at startup.

use std::env;

use portal::webdriver::DEFAULT_WEBDRIVER_URL;

/// Settings read from the environment at startup.
///
/// Loaded once and passed down explicitly; nothing re-reads the
/// environment after boot, which keeps every component testable
/// without environment mutation.
#[derive(Debug, Clone)]
pub struct AppConfig {
	/// Mail-relay account the notification is sent from.
	pub sender_email: String,
	/// Mail-relay password for `sender_email`.
	pub email_password: String,
	/// WebDriver endpoint fresh browser sessions are requested from.
	pub webdriver_url: String,
}

impl AppConfig {
	/// Reads configuration from the process environment.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| env::var(key).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		Self {
			sender_email: lookup("SENDER_EMAIL").unwrap_or_default(),
			email_password: lookup("EMAIL_PASSWORD").unwrap_or_default(),
			webdriver_url: lookup("WEBDRIVER_URL")
				.unwrap_or_else(|| DEFAULT_WEBDRIVER_URL.to_string()),
		}
	}
}
