//! Request-scoped data types.
//!
//! Pure data: nothing here touches the driver. Every value lives for a
//! single request and is discarded once the response is rendered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

/// One vacancy-check submission.
///
/// Field renames map straight onto the form field names, so the HTTP
/// layer can deserialize a submission without an intermediate type.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentRequest {
	/// Course to look for, matched as a substring of the row label.
	#[serde(rename = "course_code")]
	pub course_name: String,

	/// Slot letter, mapped to a numeric index via [`SlotIndex`].
	pub slot_letter: String,

	/// Address the outcome mail goes to.
	#[serde(rename = "email")]
	pub recipient_email: String,

	/// Portal account credentials. These belong to the portal, not to
	/// this service; they are never stored.
	pub username: String,
	pub password: String,
}

/// Alphabetic position of a slot letter (A=1 … Z=26).
///
/// The portal's slot dropdown is keyed by this number. No bounds check
/// is made against the slots the portal actually offers; a letter past
/// the end surfaces as a missing option value when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotIndex(u8);

impl SlotIndex {
	/// Parses a slot letter, either case. Anything other than exactly
	/// one ASCII letter is rejected rather than coerced.
	pub fn from_letter(input: &str) -> Result<Self> {
		let mut chars = input.chars();
		match (chars.next(), chars.next()) {
			(Some(letter), None) if letter.is_ascii_alphabetic() => {
				Ok(Self(letter.to_ascii_uppercase() as u8 - b'A' + 1))
			}
			_ => Err(PortalError::InvalidSlot {
				input: input.to_string(),
			}),
		}
	}

	pub fn value(self) -> u8 {
		self.0
	}
}

impl fmt::Display for SlotIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Result of scanning the enrollment table for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
	/// Human-readable summary, rendered on the page and mailed out.
	pub text: String,
	pub found: bool,
	pub has_vacancy: bool,
}

impl ScanOutcome {
	/// The course was found with open seats and its radio was clicked.
	pub fn selected(course_name: &str, vacancies: i64) -> Self {
		Self {
			text: format!("Course {course_name} selected. Vacancies: {vacancies}"),
			found: true,
			has_vacancy: true,
		}
	}

	/// The course was found but every seat is taken.
	pub fn full(course_name: &str) -> Self {
		Self {
			text: format!("Course {course_name} found but no vacancies."),
			found: true,
			has_vacancy: false,
		}
	}

	/// No row matched the course name.
	pub fn missing(course_name: &str) -> Self {
		Self {
			text: format!("Course {course_name} not found."),
			found: false,
			has_vacancy: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slot_index_covers_the_alphabet() {
		for (position, letter) in ('A'..='Z').enumerate() {
			let index = SlotIndex::from_letter(&letter.to_string()).unwrap();
			assert_eq!(index.value() as usize, position + 1);
		}
	}

	#[test]
	fn slot_index_accepts_lowercase() {
		assert_eq!(SlotIndex::from_letter("b").unwrap().value(), 2);
		assert_eq!(SlotIndex::from_letter("z").unwrap().value(), 26);
	}

	#[test]
	fn slot_index_rejects_non_letters() {
		for input in ["", "1", "?", "é", "AB", " a", "b "] {
			assert!(
				matches!(
					SlotIndex::from_letter(input),
					Err(PortalError::InvalidSlot { .. })
				),
				"expected rejection for {input:?}"
			);
		}
	}

	#[test]
	fn outcome_text_forms() {
		assert_eq!(
			ScanOutcome::selected("MA101", 3).text,
			"Course MA101 selected. Vacancies: 3"
		);
		assert_eq!(
			ScanOutcome::full("MA101").text,
			"Course MA101 found but no vacancies."
		);
		assert_eq!(ScanOutcome::missing("MA101").text, "Course MA101 not found.");
	}

	#[test]
	fn request_deserializes_from_form_names() {
		let request: EnrollmentRequest = serde_json::from_str(
			r#"{"course_code": "MA101", "slot_letter": "b", "email": "x@example.com",
			    "username": "u", "password": "p"}"#,
		)
		.unwrap();
		assert_eq!(request.course_name, "MA101");
		assert_eq!(request.recipient_email, "x@example.com");
	}
}
