//! Outcome notification over the fixed mail relay.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::AppConfig;

const RELAY_HOST: &str = "smtp.gmail.com";
const RELAY_PORT: u16 = 587;

/// Why a notification failed to go out.
#[derive(Debug, Error)]
pub enum NotifyError {
	/// Credentials or addresses are missing or malformed.
	#[error("notifier misconfigured: {0}")]
	Config(String),

	/// The relay could not be reached (connect, TLS, timeout).
	#[error("could not reach mail relay: {0}")]
	Network(String),

	/// The relay answered and refused the message.
	#[error("mail relay rejected the message: {0}")]
	Rejected(String),
}

/// Outcome of one notification attempt.
#[derive(Debug)]
pub enum DeliveryReport {
	Sent { recipient: String },
	Failed(NotifyError),
}

impl DeliveryReport {
	/// Line rendered on the result page.
	pub fn status_line(&self) -> String {
		match self {
			DeliveryReport::Sent { recipient } => {
				format!("Notification email sent to {recipient}")
			}
			DeliveryReport::Failed(err) => format!("Failed to send email: {err}"),
		}
	}

	pub fn is_sent(&self) -> bool {
		matches!(self, DeliveryReport::Sent { .. })
	}
}

/// Sends plain-text outcome mails through the relay (STARTTLS, 587).
pub struct Notifier {
	sender: String,
	password: String,
	relay_host: String,
	relay_port: u16,
}

impl Notifier {
	pub fn new(config: &AppConfig) -> Self {
		Self {
			sender: config.sender_email.clone(),
			password: config.email_password.clone(),
			relay_host: RELAY_HOST.to_string(),
			relay_port: RELAY_PORT,
		}
	}

	/// Points the notifier at a different relay.
	pub fn with_relay(mut self, host: &str, port: u16) -> Self {
		self.relay_host = host.to_string();
		self.relay_port = port;
		self
	}

	/// Best-effort delivery: failures are classified and reported,
	/// never propagated. The request renders either way.
	pub async fn notify(&self, course_name: &str, recipient: &str, status: &str) -> DeliveryReport {
		match self.send(course_name, recipient, status).await {
			Ok(()) => {
				info!(target = "seatcheck.notify", %recipient, "notification sent");
				DeliveryReport::Sent {
					recipient: recipient.to_string(),
				}
			}
			Err(err) => {
				warn!(target = "seatcheck.notify", %recipient, error = %err, "notification failed");
				DeliveryReport::Failed(err)
			}
		}
	}

	async fn send(
		&self,
		course_name: &str,
		recipient: &str,
		status: &str,
	) -> Result<(), NotifyError> {
		if self.sender.is_empty() || self.password.is_empty() {
			return Err(NotifyError::Config(
				"SENDER_EMAIL and EMAIL_PASSWORD must be set".to_string(),
			));
		}

		let from: Mailbox = self
			.sender
			.parse()
			.map_err(|_| NotifyError::Config(format!("invalid sender address {:?}", self.sender)))?;
		let to: Mailbox = recipient
			.parse()
			.map_err(|_| NotifyError::Config(format!("invalid recipient address {recipient:?}")))?;

		let message = Message::builder()
			.from(from)
			.to(to)
			.subject(format!("Course {course_name} Status"))
			.header(ContentType::TEXT_PLAIN)
			.body(format!(
				"The course {course_name} {status}. Please check the website for details."
			))
			.map_err(|e| NotifyError::Config(e.to_string()))?;

		let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.relay_host)
			.map_err(|e| NotifyError::Config(e.to_string()))?
			.port(self.relay_port)
			.credentials(Credentials::new(self.sender.clone(), self.password.clone()))
			.build();

		match transport.send(message).await {
			Ok(_) => Ok(()),
			Err(err) if err.is_permanent() || err.is_transient() => {
				Err(NotifyError::Rejected(err.to_string()))
			}
			Err(err) => Err(NotifyError::Network(err.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(sender: &str, password: &str) -> AppConfig {
		AppConfig {
			sender_email: sender.to_string(),
			email_password: password.to_string(),
			webdriver_url: String::new(),
		}
	}

	#[tokio::test]
	async fn missing_credentials_report_a_config_failure() {
		let notifier = Notifier::new(&config("", ""));
		let report = notifier
			.notify("MA101", "x@example.com", "Course MA101 not found.")
			.await;

		assert!(!report.is_sent());
		assert!(matches!(
			report,
			DeliveryReport::Failed(NotifyError::Config(_))
		));
	}

	#[tokio::test]
	async fn malformed_recipient_reports_a_config_failure() {
		let notifier = Notifier::new(&config("bot@example.com", "pw"));
		let report = notifier.notify("MA101", "not-an-address", "status").await;

		assert!(matches!(
			report,
			DeliveryReport::Failed(NotifyError::Config(_))
		));
	}

	#[tokio::test]
	async fn unreachable_relay_reports_a_network_failure() {
		// Nothing listens on port 1; the connect fails immediately.
		let notifier = Notifier::new(&config("bot@example.com", "pw")).with_relay("127.0.0.1", 1);
		let report = notifier
			.notify("MA101", "x@example.com", "Course MA101 not found.")
			.await;

		assert!(matches!(
			report,
			DeliveryReport::Failed(NotifyError::Network(_))
		));
		assert!(report.status_line().starts_with("Failed to send email:"));
	}

	#[test]
	fn status_lines_match_the_page_contract() {
		let sent = DeliveryReport::Sent {
			recipient: "x@example.com".to_string(),
		};
		assert_eq!(sent.status_line(), "Notification email sent to x@example.com");

		let failed = DeliveryReport::Failed(NotifyError::Rejected("550".to_string()));
		assert_eq!(
			failed.status_line(),
			"Failed to send email: mail relay rejected the message: 550"
		);
	}
}
