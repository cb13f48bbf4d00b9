//! End-to-end tests for the admin API.
//!
//! Each test assembles the real router over an in-memory database and
//! drives it with `tower::ServiceExt::oneshot`, asserting on status
//! codes and JSON bodies the way the admin UI consumes them.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use pipeline_admin::auth::SessionService;
use pipeline_admin::database::models::{AnalyticsEvent, Application, ContactMessage};
use pipeline_admin::database::{self, queries};
use pipeline_admin::{build_router, AppState};

const ADMIN: &str = "admin@example.com";

async fn test_state() -> AppState {
    let db = database::connect("sqlite::memory:").await.unwrap();
    let sessions = SessionService::new("test-secret", vec![ADMIN.to_string()]);
    AppState { db, sessions }
}

fn token(state: &AppState) -> String {
    state.sessions.issue(ADMIN, Duration::hours(1)).unwrap()
}

fn application(id: &str, job_title: &str) -> Application {
    Application {
        id: id.to_string(),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        whatsapp: String::new(),
        college: "IIT".to_string(),
        specialization: "CS".to_string(),
        year_of_grad: "2026".to_string(),
        cgpa: "8.4".to_string(),
        backlogs: "0".to_string(),
        job_title: job_title.to_string(),
        resume_url: String::new(),
        uploaded_at: Utc::now(),
        is_read: false,
    }
}

fn message(id: &str) -> ContactMessage {
    ContactMessage {
        id: id.to_string(),
        name: "Ravi".to_string(),
        email: "ravi@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Hi there".to_string(),
        created_at: Utc::now(),
        is_read: false,
    }
}

fn event(name: &str, value: Option<&str>, created_at: chrono::DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent {
        id: Uuid::new_v4().to_string(),
        event_name: name.to_string(),
        event_category: Some("engagement".to_string()),
        event_value: value.map(str::to_string),
        created_at,
    }
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, path: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn health_needs_no_session() {
    let state = test_state().await;
    let (status, body) = send(&state, get("/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn guarded_routes_reject_missing_sessions() {
    let state = test_state().await;
    for path in [
        "/api/applications",
        "/api/applications/filters",
        "/api/messages",
        "/api/dashboard",
        "/api/analytics",
        "/api/auth/me",
    ] {
        let (status, body) = send(&state, get(path, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(body, json!({ "error": "Unauthorized" }), "{path}");
    }

    // Mutating routes hit the guard before the body is ever parsed.
    for (method, path) in [
        ("PATCH", "/api/applications"),
        ("POST", "/api/applications/bulk-delete"),
        ("PATCH", "/api/messages"),
        ("POST", "/api/messages/bulk-delete"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(body, json!({ "error": "Unauthorized" }), "{method} {path}");
    }
}

#[tokio::test]
async fn forged_token_is_rejected() {
    let state = test_state().await;
    let (status, _) = send(&state, get("/api/applications", Some("forged.token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_cookie_is_accepted() {
    let state = test_state().await;
    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::COOKIE, format!("other=1; admin_session={}", token(&state)))
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "email": ADMIN }));
}

#[tokio::test]
async fn applications_listed_newest_first() {
    let state = test_state().await;
    let mut old = application("old", "Intern");
    old.uploaded_at = Utc::now() - Duration::days(3);
    queries::insert_application(&state.db, &old).await.unwrap();
    queries::insert_application(&state.db, &application("new", "Engineer"))
        .await
        .unwrap();

    let (status, body) = send(&state, get("/api/applications", Some(&token(&state)))).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "new");
    assert_eq!(rows[1]["id"], "old");
    assert_eq!(rows[0]["isRead"], json!(false));
}

#[tokio::test]
async fn detail_view_marks_application_read() {
    let state = test_state().await;
    queries::insert_application(&state.db, &application("a1", "Intern"))
        .await
        .unwrap();
    let token = token(&state);

    let (status, body) = send(&state, get("/api/applications/a1", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isRead"], json!(true));

    // Second view is a no-op with respect to final state.
    let (_, body) = send(&state, get("/api/applications/a1", Some(&token))).await;
    assert_eq!(body["isRead"], json!(true));
}

#[tokio::test]
async fn detail_view_of_unknown_id_is_not_found() {
    let state = test_state().await;
    let (status, body) = send(&state, get("/api/applications/ghost", Some(&token(&state)))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn patch_validates_the_body() {
    let state = test_state().await;
    queries::insert_application(&state.db, &application("a1", "Intern"))
        .await
        .unwrap();
    let token = token(&state);

    for body in [
        json!({ "isRead": true }),
        json!({ "id": "a1" }),
        json!({ "id": "a1", "isRead": "yes" }),
        json!({ "id": "", "isRead": true }),
    ] {
        let (status, _) = send(
            &state,
            json_request("PATCH", "/api/applications", &token, body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }

    let (status, _) = send(
        &state,
        json_request(
            "PATCH",
            "/api/applications",
            &token,
            json!({ "id": "ghost", "isRead": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_read_flag_is_monotonic() {
    let state = test_state().await;
    queries::insert_application(&state.db, &application("a1", "Intern"))
        .await
        .unwrap();
    let token = token(&state);

    let (status, body) = send(
        &state,
        json_request(
            "PATCH",
            "/api/applications",
            &token,
            json!({ "id": "a1", "isRead": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isRead"], json!(true));

    // An explicit false does not revert the flag.
    let (status, body) = send(
        &state,
        json_request(
            "PATCH",
            "/api/applications",
            &token,
            json!({ "id": "a1", "isRead": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isRead"], json!(true));
}

#[tokio::test]
async fn bulk_delete_reports_rows_actually_deleted() {
    let state = test_state().await;
    queries::insert_application(&state.db, &application("a", "Intern"))
        .await
        .unwrap();

    let (status, body) = send(
        &state,
        json_request(
            "POST",
            "/api/applications/bulk-delete",
            &token(&state),
            json!({ "ids": ["a", "b"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "deleted": 1 }));
}

#[tokio::test]
async fn bulk_delete_rejects_non_array_ids() {
    let state = test_state().await;
    queries::insert_application(&state.db, &application("a", "Intern"))
        .await
        .unwrap();

    let (status, body) = send(
        &state,
        json_request(
            "POST",
            "/api/applications/bulk-delete",
            &token(&state),
            json!({ "ids": "x" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ids");

    // Nothing was deleted.
    assert!(queries::get_application(&state.db, "a").await.unwrap().is_some());
}

#[tokio::test]
async fn filters_deduplicate_and_sort_column_values() {
    let state = test_state().await;
    for (id, job_title) in [("1", "Intern"), ("2", "Intern"), ("3", ""), ("4", "Engineer")] {
        queries::insert_application(&state.db, &application(id, job_title))
            .await
            .unwrap();
    }

    let (status, body) = send(
        &state,
        get("/api/applications/filters", Some(&token(&state))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobTitles"], json!(["Engineer", "Intern"]));
    assert_eq!(body["cgpaRanges"], json!(["7-8", "8-9", "9-10", "10+"]));
    assert_eq!(body["years"], json!(["2026"]));
}

#[tokio::test]
async fn messages_mirror_application_semantics() {
    let state = test_state().await;
    queries::insert_message(&state.db, &message("m1")).await.unwrap();
    queries::insert_message(&state.db, &message("m2")).await.unwrap();
    let token = token(&state);

    let (status, body) = send(&state, get("/api/messages", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&state, get("/api/messages/m1", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isRead"], json!(true));

    let (status, body) = send(
        &state,
        json_request(
            "POST",
            "/api/messages/bulk-delete",
            &token,
            json!({ "ids": ["m1", "m2", "ghost"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], json!(2));
}

#[tokio::test]
async fn dashboard_reports_counts_and_twelve_buckets() {
    let state = test_state().await;
    queries::insert_application(&state.db, &application("a", "Intern"))
        .await
        .unwrap();
    queries::insert_message(&state.db, &message("m")).await.unwrap();
    queries::set_message_read(&state.db, "m", true).await.unwrap();

    let now = Utc::now();
    queries::insert_event(&state.db, &event("application_form_submit", None, now))
        .await
        .unwrap();
    queries::insert_event(&state.db, &event("application_form_submit", None, now))
        .await
        .unwrap();

    let (status, body) = send(&state, get("/api/dashboard", Some(&token(&state)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalApplications"], json!(1));
    assert_eq!(body["unreadApplications"], json!(1));
    assert_eq!(body["totalMessages"], json!(1));
    assert_eq!(body["unreadMessages"], json!(0));
    assert_eq!(body["analyticsDegraded"], json!(false));

    let monthly = body["monthly"].as_array().unwrap();
    assert_eq!(monthly.len(), 12);
    assert_eq!(monthly[11]["count"], json!(2));
    assert!(monthly[..11].iter().all(|b| b["count"] == json!(0)));
}

#[tokio::test]
async fn dashboard_degrades_when_event_source_is_unavailable() {
    let state = test_state().await;
    queries::insert_application(&state.db, &application("a", "Intern"))
        .await
        .unwrap();

    // Break the event source; the page must still render with an
    // all-zero series flagged as degraded rather than a 500.
    sqlx::query("DROP TABLE analytics_events")
        .execute(&state.db)
        .await
        .unwrap();

    let (status, body) = send(&state, get("/api/dashboard", Some(&token(&state)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalApplications"], json!(1));
    assert_eq!(body["analyticsDegraded"], json!(true));

    let monthly = body["monthly"].as_array().unwrap();
    assert_eq!(monthly.len(), 12);
    assert!(monthly.iter().all(|b| b["count"] == json!(0)));
}

#[tokio::test]
async fn analytics_summary_computes_retention_and_sources() {
    let state = test_state().await;
    let now = Utc::now();

    for _ in 0..4 {
        queries::insert_event(&state.db, &event("session_start", None, now))
            .await
            .unwrap();
    }
    queries::insert_event(&state.db, &event("return_visit", None, now))
        .await
        .unwrap();
    queries::insert_event(&state.db, &event("contact_form_submit", None, now))
        .await
        .unwrap();
    queries::insert_event(
        &state.db,
        &event("contact_form_submit", None, now - Duration::days(30)),
    )
    .await
    .unwrap();
    queries::insert_event(&state.db, &event("careers_click", Some("linkedin"), now))
        .await
        .unwrap();
    queries::insert_event(&state.db, &event("careers_click", Some("linkedin"), now))
        .await
        .unwrap();

    let (status, body) = send(&state, get("/api/analytics", Some(&token(&state)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], json!(4));
    assert_eq!(body["returnVisits"], json!(1));
    assert_eq!(body["newSessions"], json!(3));
    assert_eq!(body["retentionRate"], json!("25.0"));
    assert_eq!(body["contactFormSubmissions"], json!(2));
    assert_eq!(body["applicationFormSubmissions"], json!(0));
    assert_eq!(body["recentSubmissions"]["contact"], json!(1));
    assert_eq!(body["recentSubmissions"]["total"], json!(1));
    assert_eq!(
        body["careersBySource"],
        json!([{ "source": "linkedin", "count": 2 }])
    );
    assert_eq!(body["recentEvents"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn retention_rate_is_zero_placeholder_without_sessions() {
    let state = test_state().await;
    let (status, body) = send(&state, get("/api/analytics", Some(&token(&state)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["retentionRate"], json!("0"));
}
