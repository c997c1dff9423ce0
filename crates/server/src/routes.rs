//! HTTP surface: the form page and the check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use tracing::{error, info};

use portal::{EnrollmentRequest, PortalError, WaitConfig};

use crate::notify::Notifier;
use crate::pages;
use crate::session::SessionFactory;

/// Shared request-handling context. Nothing here is mutable; every
/// request gets its own browser session from the factory.
#[derive(Clone)]
pub struct AppState {
	pub sessions: Arc<dyn SessionFactory>,
	pub notifier: Arc<Notifier>,
	pub wait: WaitConfig,
}

pub fn build_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(index))
		.route("/check", post(check))
		.with_state(state)
}

async fn index() -> Html<String> {
	Html(pages::index_page())
}

/// Runs the whole check workflow for one submission.
async fn check(
	State(state): State<AppState>,
	Form(request): Form<EnrollmentRequest>,
) -> Result<Html<String>, AppError> {
	info!(
		target = "seatcheck",
		course = %request.course_name,
		slot = %request.slot_letter,
		"check requested"
	);

	// One fresh browser per request; a session that cannot start is
	// fatal to the request.
	let driver = state.sessions.open().await?;
	let outcome =
		portal::flow::check_with_session(driver.as_ref(), &request, &state.wait).await?;

	// Notification is best-effort; the page renders either way.
	let report = state
		.notifier
		.notify(&request.course_name, &request.recipient_email, &outcome.text)
		.await;

	Ok(Html(pages::result_page(&outcome.text, &report.status_line())))
}

/// Workflow failure surfaced at the request boundary.
///
/// Details go to the log; the response body stays generic.
struct AppError(PortalError);

impl From<PortalError> for AppError {
	fn from(err: PortalError) -> Self {
		Self(err)
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response {
		error!(target = "seatcheck", error = %self.0, "check failed");
		(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
	}
}
