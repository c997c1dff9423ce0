//! WebDriver-backed portal session.

use std::time::Instant;

use async_trait::async_trait;
use thirtyfour::prelude::*;
use tracing::debug;

use crate::driver::{PortalDriver, RowView};
use crate::error::{PortalError, Result};
use crate::wait::WaitConfig;

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Fixed launch flags for the headless session.
const CHROME_ARGS: [&str; 4] = [
	"--headless",
	"--no-sandbox",
	"--disable-gpu",
	"--disable-dev-shm-usage",
];

/// Connection settings for the WebDriver endpoint.
#[derive(Debug, Clone)]
pub struct DriverConfig {
	/// WebDriver endpoint (chromedriver or a Selenium grid).
	pub webdriver_url: String,
}

impl Default for DriverConfig {
	fn default() -> Self {
		Self {
			webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
		}
	}
}

/// A live browser session speaking the WebDriver protocol.
///
/// Every request opens its own session and pays the full browser
/// startup cost; there is no pooling.
pub struct WebDriverPortal {
	driver: WebDriver,
}

impl WebDriverPortal {
	/// Launches a fresh headless browser through the WebDriver endpoint.
	pub async fn open(config: &DriverConfig) -> Result<Self> {
		let mut caps = DesiredCapabilities::chrome();
		caps.add_chrome_option("args", CHROME_ARGS.to_vec())
			.map_err(|e| PortalError::Session(e.to_string()))?;

		debug!(
			target = "seatcheck.portal",
			url = %config.webdriver_url,
			"starting browser session"
		);
		let driver = WebDriver::new(config.webdriver_url.as_str(), caps)
			.await
			.map_err(|e| PortalError::Session(e.to_string()))?;

		Ok(Self { driver })
	}

	async fn find(&self, selector: &str) -> Result<WebElement> {
		self.driver
			.find(By::Css(selector))
			.await
			.map_err(|_| PortalError::ElementNotFound {
				selector: selector.to_string(),
			})
	}
}

#[async_trait]
impl PortalDriver for WebDriverPortal {
	async fn goto(&self, url: &str) -> Result<()> {
		self.driver
			.goto(url)
			.await
			.map_err(|e| PortalError::Navigation {
				url: url.to_string(),
				source: anyhow::Error::new(e),
			})
	}

	async fn wait_visible(&self, selector: &str, wait: &WaitConfig) -> Result<()> {
		let started = Instant::now();
		loop {
			if self.driver.find(By::Css(selector)).await.is_ok() {
				return Ok(());
			}
			if started.elapsed() >= wait.timeout {
				return Err(PortalError::Timeout {
					ms: wait.timeout_ms(),
					condition: selector.to_string(),
				});
			}
			tokio::time::sleep(wait.poll_interval).await;
		}
	}

	async fn fill(&self, selector: &str, value: &str) -> Result<()> {
		Ok(self.find(selector).await?.send_keys(value).await?)
	}

	async fn click(&self, selector: &str) -> Result<()> {
		Ok(self.find(selector).await?.click().await?)
	}

	async fn read_text(&self, selector: &str) -> Result<String> {
		Ok(self.find(selector).await?.text().await?)
	}

	async fn select_value(&self, selector: &str, value: &str) -> Result<()> {
		// Clicking the option node has the same effect as a
		// select-by-value and keeps the driver surface to find/click.
		let option = format!("{selector} option[value='{value}']");
		Ok(self.find(&option).await?.click().await?)
	}

	async fn table_rows(&self, selector: &str) -> Result<Vec<RowView>> {
		let rows = self.driver.find_all(By::Css(selector)).await?;
		let mut views = Vec::with_capacity(rows.len());
		for (index, row) in rows.iter().enumerate() {
			let labels = element_texts(row.find_all(By::Tag("label")).await?).await?;
			let badges = element_texts(row.find_all(By::ClassName("badge")).await?).await?;
			let radios = row.find_all(By::Css("input[type='radio']")).await?;
			// nth-child is 1-based and rebuilds a clickable path to the
			// radio without holding a live element handle.
			let radio = (!radios.is_empty())
				.then(|| format!("{selector}:nth-child({}) input[type='radio']", index + 1));
			views.push(RowView {
				labels,
				badges,
				radio,
			});
		}
		Ok(views)
	}

	async fn close(&self) -> Result<()> {
		debug!(target = "seatcheck.portal", "closing browser session");
		Ok(self.driver.clone().quit().await?)
	}
}

async fn element_texts(elements: Vec<WebElement>) -> Result<Vec<String>> {
	let mut texts = Vec::with_capacity(elements.len());
	for element in &elements {
		texts.push(element.text().await?);
	}
	Ok(texts)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_points_at_local_chromedriver() {
		assert_eq!(DriverConfig::default().webdriver_url, DEFAULT_WEBDRIVER_URL);
	}
}
