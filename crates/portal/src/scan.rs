//! Course table scanning.

use tracing::{debug, info};

use crate::driver::PortalDriver;
use crate::error::{PortalError, Result};
use crate::types::ScanOutcome;
use crate::wait::WaitConfig;

pub const COURSE_TABLE: &str = "#tbltbodyslota";
pub const COURSE_ROWS: &str = "#tbltbodyslota tr";

/// Scans the enrollment table for `course_name`.
///
/// Matching is substring-based and the first matching row wins; a later
/// row with more vacancies is never considered. Labels and badges pair
/// positionally, truncating to the shorter list when counts differ.
pub async fn scan(
	driver: &dyn PortalDriver,
	course_name: &str,
	wait: &WaitConfig,
) -> Result<ScanOutcome> {
	driver.wait_visible(COURSE_TABLE, wait).await?;
	let rows = driver.table_rows(COURSE_ROWS).await?;
	debug!(
		target = "seatcheck.portal",
		rows = rows.len(),
		course = %course_name,
		"scanning enrollment table"
	);

	for row in &rows {
		for (label, badge) in row.labels.iter().zip(row.badges.iter()) {
			if !label.contains(course_name) {
				continue;
			}

			let vacancies: i64 =
				badge
					.trim()
					.parse()
					.map_err(|_| PortalError::BadVacancyCount {
						value: badge.clone(),
					})?;

			if vacancies <= 0 {
				info!(
					target = "seatcheck.portal",
					course = %course_name,
					"course found, no vacancies"
				);
				return Ok(ScanOutcome::full(course_name));
			}

			let radio = row.radio.as_deref().ok_or_else(|| PortalError::ElementNotFound {
				selector: "input[type='radio']".to_string(),
			})?;
			driver.click(radio).await?;
			info!(
				target = "seatcheck.portal",
				course = %course_name,
				vacancies,
				"course selected"
			);
			return Ok(ScanOutcome::selected(course_name, vacancies));
		}
	}

	info!(target = "seatcheck.portal", course = %course_name, "course not found");
	Ok(ScanOutcome::missing(course_name))
}
