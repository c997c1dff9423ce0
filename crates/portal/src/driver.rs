//! Driver abstraction over a portal browser session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::wait::WaitConfig;

/// One rendered table row, projected to the parts the scanner reads.
///
/// Not a live handle: the texts are read once when the row set is
/// enumerated. `radio` carries a selector the driver can click later.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RowView {
	/// Text of each `label` element in the row, in document order.
	pub labels: Vec<String>,
	/// Text of each `.badge` element in the row, in document order.
	pub badges: Vec<String>,
	/// Selector for the row's radio control, when the row has one.
	pub radio: Option<String>,
}

/// Browser-automation capability the check workflow runs against.
///
/// [`WebDriverPortal`] drives a real browser over WebDriver;
/// [`FakePortal`] is a deterministic in-memory stand-in for tests.
///
/// [`WebDriverPortal`]: crate::webdriver::WebDriverPortal
/// [`FakePortal`]: crate::fake::FakePortal
#[async_trait]
pub trait PortalDriver: Send + Sync {
	/// Navigates the session to `url`.
	async fn goto(&self, url: &str) -> Result<()>;

	/// Polls until `selector` matches an element or the budget runs out.
	async fn wait_visible(&self, selector: &str, wait: &WaitConfig) -> Result<()>;

	/// Types `value` into the element at `selector`.
	async fn fill(&self, selector: &str, value: &str) -> Result<()>;

	/// Clicks the element at `selector`.
	async fn click(&self, selector: &str) -> Result<()>;

	/// Returns the text content of the element at `selector`.
	async fn read_text(&self, selector: &str) -> Result<String>;

	/// Sets the `select` control at `selector` to `value`. Fails when
	/// the control has no option with that value.
	async fn select_value(&self, selector: &str, value: &str) -> Result<()>;

	/// Projects every row matched by `selector` into a [`RowView`].
	async fn table_rows(&self, selector: &str) -> Result<Vec<RowView>>;

	/// Tears the session down. Callers invoke this exactly once.
	async fn close(&self) -> Result<()>;
}
