//! Web front end for the enrollment vacancy checker.
//!
//! One form in, one result page out. Each `POST /check` opens its own
//! browser session through the portal crate, runs the linear workflow,
//! mails the outcome best-effort, and renders the result.

pub mod cli;
pub mod config;
pub mod logging;
pub mod notify;
pub mod pages;
pub mod routes;
pub mod session;

use std::sync::Arc;

use tracing::info;

use portal::WaitConfig;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::notify::Notifier;
use crate::routes::AppState;
use crate::session::WebDriverFactory;

/// Builds the application from configuration and serves until shutdown.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
	let config = AppConfig::from_env();

	let state = AppState {
		sessions: Arc::new(WebDriverFactory::new(&config.webdriver_url)),
		notifier: Arc::new(Notifier::new(&config)),
		wait: WaitConfig::default(),
	};
	let router = routes::build_router(state);

	let addr = format!("0.0.0.0:{}", cli.port);
	let listener = tokio::net::TcpListener::bind(&addr).await?;
	info!(target = "seatcheck", %addr, "listening");
	axum::serve(listener, router).await?;
	Ok(())
}
