//! Browser session acquisition.

use async_trait::async_trait;

use portal::webdriver::{DriverConfig, WebDriverPortal};
use portal::{PortalDriver, Result};

/// Opens one fresh portal session per request.
///
/// A factory rather than a pool: no session is reused, and a session
/// that cannot start is fatal to the request that asked for it.
#[async_trait]
pub trait SessionFactory: Send + Sync {
	async fn open(&self) -> Result<Box<dyn PortalDriver>>;
}

/// Factory for real WebDriver-backed sessions.
pub struct WebDriverFactory {
	config: DriverConfig,
}

impl WebDriverFactory {
	pub fn new(webdriver_url: &str) -> Self {
		Self {
			config: DriverConfig {
				webdriver_url: webdriver_url.to_string(),
			},
		}
	}
}

#[async_trait]
impl SessionFactory for WebDriverFactory {
	async fn open(&self) -> Result<Box<dyn PortalDriver>> {
		Ok(Box::new(WebDriverPortal::open(&self.config).await?))
	}
}
