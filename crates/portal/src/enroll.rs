//! Enrollment page navigation and slot selection.

use tracing::debug;

use crate::driver::PortalDriver;
use crate::error::Result;
use crate::types::SlotIndex;
use crate::wait::WaitConfig;

pub const ENROLLMENT_URL: &str = "https://arms.sse.saveetha.com/StudentPortal/Enrollment.aspx";
pub const SLOT_SELECT: &str = "#cphbody_ddlslot";

/// Opens the enrollment page and waits for the slot control to appear.
pub async fn open_enrollment(driver: &dyn PortalDriver, wait: &WaitConfig) -> Result<()> {
	driver.goto(ENROLLMENT_URL).await?;
	driver.wait_visible(SLOT_SELECT, wait).await
}

/// Sets the slot dropdown to the numeric value for `slot`.
///
/// A value the control does not offer is an element-lookup error and
/// propagates untranslated.
pub async fn select_slot(driver: &dyn PortalDriver, slot: SlotIndex) -> Result<()> {
	debug!(target = "seatcheck.portal", slot = %slot, "selecting slot");
	driver.select_value(SLOT_SELECT, &slot.value().to_string()).await
}
