//! The linear check workflow.

use crate::driver::PortalDriver;
use crate::error::Result;
use crate::types::{EnrollmentRequest, ScanOutcome, SlotIndex};
use crate::wait::WaitConfig;
use crate::{auth, enroll, scan};

/// Runs login → enrollment page → slot selection → scan.
///
/// Strictly sequential; the first failing step aborts the rest.
pub async fn check(
	driver: &dyn PortalDriver,
	request: &EnrollmentRequest,
	wait: &WaitConfig,
) -> Result<ScanOutcome> {
	let slot = SlotIndex::from_letter(&request.slot_letter)?;
	auth::login(driver, &request.username, &request.password, wait).await?;
	enroll::open_enrollment(driver, wait).await?;
	enroll::select_slot(driver, slot).await?;
	scan::scan(driver, &request.course_name, wait).await
}

/// Runs [`check`] and tears the session down on every exit path.
///
/// The session is closed exactly once. A workflow error is propagated
/// after teardown; a teardown error only surfaces when the workflow
/// itself succeeded.
pub async fn check_with_session(
	driver: &dyn PortalDriver,
	request: &EnrollmentRequest,
	wait: &WaitConfig,
) -> Result<ScanOutcome> {
	let outcome = check(driver, request, wait).await;
	let closed = driver.close().await;
	let outcome = outcome?;
	closed?;
	Ok(outcome)
}
