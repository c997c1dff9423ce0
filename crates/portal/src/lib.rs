//! Enrollment-portal automation.
//!
//! This crate holds everything that talks to the university portal:
//! the [`PortalDriver`] abstraction over a browser session, the real
//! WebDriver-backed implementation, the login/navigation/scan steps,
//! and the linear check workflow that composes them.
//!
//! The HTTP surface and the mail notifier live in the server crate;
//! nothing here knows about either.

pub mod auth;
pub mod driver;
pub mod enroll;
pub mod error;
pub mod fake;
pub mod flow;
pub mod scan;
pub mod types;
pub mod wait;
pub mod webdriver;

pub use driver::{PortalDriver, RowView};
pub use error::{PortalError, Result};
pub use types::{EnrollmentRequest, ScanOutcome, SlotIndex};
pub use wait::WaitConfig;
