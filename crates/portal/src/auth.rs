//! Portal login.

use tracing::info;

use crate::driver::PortalDriver;
use crate::error::Result;
use crate::wait::WaitConfig;

pub const LOGIN_URL: &str = "https://arms.sse.saveetha.com";
pub const USERNAME_FIELD: &str = "#txtusername";
pub const PASSWORD_FIELD: &str = "#txtpassword";
pub const LOGIN_BUTTON: &str = "#btnlogin";

/// Submits the portal login form.
///
/// Success is not verified; wrong credentials surface later as a scan
/// against whatever page the portal serves unauthenticated.
pub async fn login(
	driver: &dyn PortalDriver,
	username: &str,
	password: &str,
	wait: &WaitConfig,
) -> Result<()> {
	info!(target = "seatcheck.portal", user = %username, "logging in to portal");
	driver.goto(LOGIN_URL).await?;
	driver.wait_visible(USERNAME_FIELD, wait).await?;
	driver.fill(USERNAME_FIELD, username).await?;
	driver.fill(PASSWORD_FIELD, password).await?;
	driver.click(LOGIN_BUTTON).await?;
	Ok(())
}
