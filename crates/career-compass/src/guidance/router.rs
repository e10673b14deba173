use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use super::analytics::{AnalyticsRange, TimeRange};
use super::recommendations::RecommendationBundle;
use super::repository::{ActivityRecorder, RecommendationRepository, RecordId, RepositoryError};
use super::service::{GuidanceService, GuidanceServiceError};
use super::subjects::{CandidateProfile, StudentSubmission};

/// Router builder exposing the recommendation and analytics endpoints.
pub fn guidance_router<R, A>(service: Arc<GuidanceService<R, A>>) -> Router
where
    R: RecommendationRepository + 'static,
    A: ActivityRecorder + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(submit_handler::<R, A>))
        .route(
            "/api/v1/recommendations/:record_id",
            get(record_handler::<R, A>),
        )
        .route("/api/v1/career-paths/:grade", get(career_path_handler))
        .route("/api/v1/admin/analytics", get(analytics_handler::<R, A>))
        .route("/api/v1/admin/recent", get(recent_handler::<R, A>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitRequest {
    #[serde(default)]
    pub(crate) candidate: Option<CandidateProfile>,
    pub(crate) grades: StudentSubmission,
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<GuidanceService<R, A>>>,
    Json(payload): Json<SubmitRequest>,
) -> Response
where
    R: RecommendationRepository + 'static,
    A: ActivityRecorder + 'static,
{
    let SubmitRequest { candidate, grades } = payload;
    match service.submit(candidate, grades, Utc::now()) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(GuidanceServiceError::Incomplete(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "violations": error.report.violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(GuidanceServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "record already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn record_handler<R, A>(
    State(service): State<Arc<GuidanceService<R, A>>>,
    Path(record_id): Path<String>,
) -> Response
where
    R: RecommendationRepository + 'static,
    A: ActivityRecorder + 'static,
{
    let id = RecordId(record_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(GuidanceServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "record_id": id.0,
                "error": "record not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

/// The mean grade travels as a plain string in the URL; anything outside the
/// scale resolves to the fallback bundle rather than an error.
pub(crate) async fn career_path_handler(Path(grade): Path<String>) -> Response {
    let bundle = RecommendationBundle::for_token(&grade);
    let payload = json!({
        "requested_grade": grade,
        "recommendation": bundle,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecentQuery {
    #[serde(default = "default_recent_limit")]
    pub(crate) limit: usize,
}

fn default_recent_limit() -> usize {
    10
}

pub(crate) async fn recent_handler<R, A>(
    State(service): State<Arc<GuidanceService<R, A>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: RecommendationRepository + 'static,
    A: ActivityRecorder + 'static,
{
    match service.recent(query.limit) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, Json(json!({ "data": views }))).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyticsQuery {
    #[serde(default)]
    pub(crate) time_range: Option<TimeRange>,
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) end_date: Option<NaiveDate>,
}

impl AnalyticsQuery {
    /// Explicit dates win over the named range, mirroring the dashboard's
    /// custom range picker.
    pub(crate) fn resolve(&self, now: DateTime<Utc>) -> AnalyticsRange {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => AnalyticsRange::between_dates(start, end),
            _ => AnalyticsRange::ending_at(now, self.time_range.unwrap_or_default()),
        }
    }
}

pub(crate) async fn analytics_handler<R, A>(
    State(service): State<Arc<GuidanceService<R, A>>>,
    Query(query): Query<AnalyticsQuery>,
) -> Response
where
    R: RecommendationRepository + 'static,
    A: ActivityRecorder + 'static,
{
    let range = query.resolve(Utc::now());
    match service.analytics(range) {
        Ok(summary) => (StatusCode::OK, Json(json!({ "data": summary }))).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
