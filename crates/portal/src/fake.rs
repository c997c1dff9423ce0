//! In-memory portal for testing the workflow without a browser.
//!
//! The builder registers the elements and table rows a test expects the
//! portal to render; the resulting [`FakePortal`] records every
//! navigation, fill, click, and teardown so tests can assert on the
//! exact interaction sequence.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::driver::{PortalDriver, RowView};
use crate::error::{PortalError, Result};
use crate::wait::WaitConfig;

#[derive(Default)]
struct FakeState {
	elements: HashSet<String>,
	texts: HashMap<String, String>,
	rows: Vec<RowView>,
	slot_values: Option<HashSet<String>>,
	fail_goto: HashSet<String>,
	visited: Vec<String>,
	fills: Vec<(String, String)>,
	clicks: Vec<String>,
	selections: Vec<(String, String)>,
	close_count: usize,
}

impl FakeState {
	fn has_element(&self, selector: &str) -> bool {
		self.elements.contains(selector) || self.texts.contains_key(selector)
	}

	fn is_radio(&self, selector: &str) -> bool {
		self.rows
			.iter()
			.any(|row| row.radio.as_deref() == Some(selector))
	}
}

/// Builder for [`FakePortal`] instances.
#[derive(Default)]
pub struct FakePortalBuilder {
	state: FakeState,
}

impl FakePortalBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers an element so lookups and waits on `selector` succeed.
	pub fn element(mut self, selector: &str) -> Self {
		self.state.elements.insert(selector.to_string());
		self
	}

	/// Registers an element with readable text.
	pub fn text(mut self, selector: &str, text: &str) -> Self {
		self.state.texts.insert(selector.to_string(), text.to_string());
		self
	}

	/// Appends a table row. `radio` is the selector a click on the
	/// row's radio control is recorded under.
	pub fn row(mut self, labels: &[&str], badges: &[&str], radio: Option<&str>) -> Self {
		self.state.rows.push(RowView {
			labels: labels.iter().map(|s| s.to_string()).collect(),
			badges: badges.iter().map(|s| s.to_string()).collect(),
			radio: radio.map(|s| s.to_string()),
		});
		self
	}

	/// Restricts the slot control to the given option values. Without
	/// this call any value is accepted.
	pub fn slot_values(mut self, values: &[&str]) -> Self {
		self.state.slot_values = Some(values.iter().map(|s| s.to_string()).collect());
		self
	}

	/// Makes navigation to `url` fail.
	pub fn fail_goto(mut self, url: &str) -> Self {
		self.state.fail_goto.insert(url.to_string());
		self
	}

	pub fn build(self) -> FakePortal {
		FakePortal {
			state: Arc::new(Mutex::new(self.state)),
		}
	}
}

/// Deterministic in-memory [`PortalDriver`].
///
/// Clones share state, so a test can keep one handle for assertions
/// while the workflow consumes another.
#[derive(Clone)]
pub struct FakePortal {
	state: Arc<Mutex<FakeState>>,
}

impl FakePortal {
	fn lock(&self) -> MutexGuard<'_, FakeState> {
		self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	/// URLs navigated to, in order.
	pub fn visited(&self) -> Vec<String> {
		self.lock().visited.clone()
	}

	/// `(selector, value)` pairs typed into fields, in order.
	pub fn fills(&self) -> Vec<(String, String)> {
		self.lock().fills.clone()
	}

	/// Selectors clicked, in order.
	pub fn clicks(&self) -> Vec<String> {
		self.lock().clicks.clone()
	}

	/// `(selector, value)` pairs set on select controls, in order.
	pub fn selections(&self) -> Vec<(String, String)> {
		self.lock().selections.clone()
	}

	/// How many times the session was torn down.
	pub fn close_count(&self) -> usize {
		self.lock().close_count
	}
}

#[async_trait]
impl PortalDriver for FakePortal {
	async fn goto(&self, url: &str) -> Result<()> {
		let mut state = self.lock();
		if state.fail_goto.contains(url) {
			return Err(PortalError::Navigation {
				url: url.to_string(),
				source: anyhow::anyhow!("connection reset by portal"),
			});
		}
		state.visited.push(url.to_string());
		Ok(())
	}

	async fn wait_visible(&self, selector: &str, wait: &WaitConfig) -> Result<()> {
		let state = self.lock();
		if state.has_element(selector) {
			Ok(())
		} else {
			Err(PortalError::Timeout {
				ms: wait.timeout_ms(),
				condition: selector.to_string(),
			})
		}
	}

	async fn fill(&self, selector: &str, value: &str) -> Result<()> {
		let mut state = self.lock();
		if !state.has_element(selector) {
			return Err(PortalError::ElementNotFound {
				selector: selector.to_string(),
			});
		}
		state.fills.push((selector.to_string(), value.to_string()));
		Ok(())
	}

	async fn click(&self, selector: &str) -> Result<()> {
		let mut state = self.lock();
		if !state.has_element(selector) && !state.is_radio(selector) {
			return Err(PortalError::ElementNotFound {
				selector: selector.to_string(),
			});
		}
		state.clicks.push(selector.to_string());
		Ok(())
	}

	async fn read_text(&self, selector: &str) -> Result<String> {
		let state = self.lock();
		state
			.texts
			.get(selector)
			.cloned()
			.ok_or_else(|| PortalError::ElementNotFound {
				selector: selector.to_string(),
			})
	}

	async fn select_value(&self, selector: &str, value: &str) -> Result<()> {
		let mut state = self.lock();
		if !state.has_element(selector) {
			return Err(PortalError::ElementNotFound {
				selector: selector.to_string(),
			});
		}
		if let Some(values) = &state.slot_values {
			if !values.contains(value) {
				return Err(PortalError::ElementNotFound {
					selector: format!("{selector} option[value='{value}']"),
				});
			}
		}
		state.selections.push((selector.to_string(), value.to_string()));
		Ok(())
	}

	async fn table_rows(&self, _selector: &str) -> Result<Vec<RowView>> {
		Ok(self.lock().rows.clone())
	}

	async fn close(&self) -> Result<()> {
		self.lock().close_count += 1;
		Ok(())
	}
}
