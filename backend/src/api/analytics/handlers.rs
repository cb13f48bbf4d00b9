//! Handler functions for the dashboard and analytics summary endpoints.
//!
//! These fetch bounded event windows through `database::queries` and
//! hand the rows to `services::data_aggregator` for the derived numbers.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tracing::warn;

use crate::auth::AdminSession;
use crate::database::queries;
use crate::errors::ApiError;
use crate::services::data_aggregator as aggregator;
use crate::AppState;

const SUBMIT_EVENTS: [&str; 2] = ["contact_form_submit", "application_form_submit"];

/// GET /api/dashboard — unread/total counts plus the 12-month chart
/// series of application form submissions.
pub async fn dashboard(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let db = &state.db;

    let total_applications = queries::count_applications(db).await?;
    let unread_applications = queries::count_unread_applications(db).await?;
    let total_messages = queries::count_messages(db).await?;
    let unread_messages = queries::count_unread_messages(db).await?;

    let now = Utc::now();
    // 366 days bounds the fetch; the bucketing itself matches by calendar
    // month. Chart data is best-effort: a failing event source degrades
    // to an all-zero series flagged as such instead of failing the page.
    let (monthly, degraded) = match queries::events_named_since(
        db,
        "application_form_submit",
        now - Duration::days(366),
    )
    .await
    {
        Ok(events) => (aggregator::monthly_buckets(&events, now), false),
        Err(err) => {
            warn!("analytics source unavailable, serving empty chart: {err}");
            (aggregator::empty_monthly_buckets(now), true)
        }
    };

    Ok(Json(json!({
        "totalApplications": total_applications,
        "unreadApplications": unread_applications,
        "totalMessages": total_messages,
        "unreadMessages": unread_messages,
        "monthly": monthly,
        "analyticsDegraded": degraded,
    })))
}

/// GET /api/analytics — submission totals, retention, 7-day trend,
/// careers engagement by source, and the 100 most recent events.
pub async fn summary(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let db = &state.db;

    let contact_submissions = queries::count_events_named(db, "contact_form_submit").await?;
    let application_submissions =
        queries::count_events_named(db, "application_form_submit").await?;
    let total_sessions = queries::count_events_named(db, "session_start").await?;
    let return_visits = queries::count_events_named(db, "return_visit").await?;

    let week_ago = Utc::now() - Duration::days(7);
    let submissions = queries::events_named_in(db, &SUBMIT_EVENTS).await?;
    let recent_contact = aggregator::count_recent(&submissions, &["contact_form_submit"], week_ago);
    let recent_applications =
        aggregator::count_recent(&submissions, &["application_form_submit"], week_ago);
    let recent_total = aggregator::count_recent(&submissions, &SUBMIT_EVENTS, week_ago);

    let careers = queries::events_containing_with_value(db, "careers").await?;
    let careers_by_source = aggregator::count_by_value(&careers);

    let recent_events = queries::recent_events(db, 100).await?;

    Ok(Json(json!({
        "contactFormSubmissions": contact_submissions,
        "applicationFormSubmissions": application_submissions,
        "totalSessions": total_sessions,
        "returnVisits": return_visits,
        "newSessions": total_sessions - return_visits,
        "retentionRate": aggregator::retention_rate(total_sessions, return_visits),
        "recentSubmissions": {
            "contact": recent_contact,
            "applications": recent_applications,
            "total": recent_total,
        },
        "careersBySource": careers_by_source,
        "recentEvents": recent_events,
    })))
}
