//! End-to-end router tests against the in-memory portal driver.
//!
//! No sockets and no real relay: the browser side is `FakePortal` and
//! the notifier is left unconfigured, so every delivery report is a
//! failure — which is itself one of the properties under test.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use portal::fake::{FakePortal, FakePortalBuilder};
use portal::{PortalDriver, WaitConfig, auth, enroll, scan};
use seatcheck_server::config::AppConfig;
use seatcheck_server::notify::Notifier;
use seatcheck_server::routes::{AppState, build_router};
use seatcheck_server::session::SessionFactory;

struct FakeFactory {
	portal: FakePortal,
}

#[async_trait]
impl SessionFactory for FakeFactory {
	async fn open(&self) -> portal::Result<Box<dyn PortalDriver>> {
		Ok(Box::new(self.portal.clone()))
	}
}

fn unconfigured_notifier() -> Notifier {
	Notifier::new(&AppConfig {
		sender_email: String::new(),
		email_password: String::new(),
		webdriver_url: String::new(),
	})
}

fn app(portal: FakePortal) -> Router {
	build_router(AppState {
		sessions: Arc::new(FakeFactory { portal }),
		notifier: Arc::new(unconfigured_notifier()),
		wait: WaitConfig::default(),
	})
}

fn portal_with_row(labels: &[&str], badges: &[&str], radio: Option<&str>) -> FakePortal {
	FakePortalBuilder::new()
		.element(auth::USERNAME_FIELD)
		.element(auth::PASSWORD_FIELD)
		.element(auth::LOGIN_BUTTON)
		.element(enroll::SLOT_SELECT)
		.element(scan::COURSE_TABLE)
		.row(labels, badges, radio)
		.build()
}

fn check_form(course: &str, slot: &str) -> Request<Body> {
	let body = format!(
		"course_code={course}&slot_letter={slot}&email=x%40example.com&username=u&password=p"
	);
	Request::builder()
		.method("POST")
		.uri("/check")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from(body))
		.unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_renders_the_form() {
	let app = app(FakePortalBuilder::new().build());
	let response = app
		.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains("name=\"course_code\""));
	assert!(body.contains("action=\"/check\""));
}

#[tokio::test]
async fn check_selects_course_and_renders_both_status_lines() {
	let portal = portal_with_row(&["MA101 - Calculus"], &["3"], Some("#radio-ma101"));
	let app = app(portal.clone());

	let response = app.oneshot(check_form("MA101", "b")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_text(response).await;
	assert!(body.contains("Course MA101 selected. Vacancies: 3"));
	// Unconfigured notifier: the page still renders, with a failure
	// indicator instead of a silent success claim.
	assert!(body.contains("Failed to send email:"));

	assert_eq!(
		portal.selections(),
		vec![(enroll::SLOT_SELECT.to_string(), "2".to_string())]
	);
	assert_eq!(portal.clicks(), vec!["#btnlogin", "#radio-ma101"]);
	assert_eq!(portal.close_count(), 1);
}

#[tokio::test]
async fn full_course_renders_without_selecting() {
	let portal = portal_with_row(&["MA101 - Calculus"], &["0"], Some("#radio-ma101"));
	let app = app(portal.clone());

	let response = app.oneshot(check_form("MA101", "a")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_text(response).await;
	assert!(body.contains("Course MA101 found but no vacancies."));
	assert_eq!(portal.clicks(), vec!["#btnlogin"]);
}

#[tokio::test]
async fn missing_course_renders_not_found() {
	let portal = portal_with_row(&["CS200 - Networks"], &["5"], Some("#radio-cs200"));
	let app = app(portal.clone());

	let response = app.oneshot(check_form("MA101", "a")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains("Course MA101 not found."));
}

#[tokio::test]
async fn workflow_failure_is_a_generic_server_error_with_teardown() {
	let portal = FakePortalBuilder::new()
		.element(auth::USERNAME_FIELD)
		.element(auth::PASSWORD_FIELD)
		.element(auth::LOGIN_BUTTON)
		.fail_goto(enroll::ENROLLMENT_URL)
		.build();
	let app = app(portal.clone());

	let response = app.oneshot(check_form("MA101", "b")).await.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

	let body = body_text(response).await;
	assert!(body.contains("internal server error"));
	assert!(!body.contains("connection reset"));
	assert_eq!(portal.close_count(), 1);
}

#[tokio::test]
async fn missing_form_field_is_a_client_error() {
	let portal = portal_with_row(&["MA101 - Calculus"], &["3"], Some("#radio-ma101"));
	let app = app(portal.clone());

	let request = Request::builder()
		.method("POST")
		.uri("/check")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from("course_code=MA101&slot_letter=b"))
		.unwrap();

	let response = app.oneshot(request).await.unwrap();
	assert!(response.status().is_client_error());
	// The extractor rejected the request before any browser work.
	assert_eq!(portal.close_count(), 0);
	assert!(portal.visited().is_empty());
}

#[tokio::test]
async fn invalid_slot_letter_is_a_server_error() {
	let portal = portal_with_row(&["MA101 - Calculus"], &["3"], Some("#radio-ma101"));
	let app = app(portal.clone());

	let response = app.oneshot(check_form("MA101", "7")).await.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(portal.close_count(), 1);
}
