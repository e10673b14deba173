use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::analytics::{AnalyticsRange, AnalyticsSummary};
use super::mean::MeanGradeSummary;
use super::repository::{
    ActivityAction, ActivityError, ActivityEvent, ActivityRecorder, RecommendationRecord,
    RecommendationRepository, RecordId, RepositoryError,
};
use super::strengths;
use super::subjects::{CandidateProfile, StudentSubmission};
use super::validation::{self, IncompleteSubmission};

/// Service composing validation, scoring, persistence, and activity logging.
pub struct GuidanceService<R, A> {
    repository: Arc<R>,
    activity: Arc<A>,
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_record_id() -> RecordId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecordId(format!("rec-{id:06}"))
}

const STRENGTH_LIMIT: usize = 3;

impl<R, A> GuidanceService<R, A>
where
    R: RecommendationRepository + 'static,
    A: ActivityRecorder + 'static,
{
    pub fn new(repository: Arc<R>, activity: Arc<A>) -> Self {
        Self {
            repository,
            activity,
        }
    }

    /// Validate, score, and persist a submission, returning the stored record.
    pub fn submit(
        &self,
        candidate: Option<CandidateProfile>,
        submission: StudentSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<RecommendationRecord, GuidanceServiceError> {
        validation::ensure_complete(&submission)?;

        let mean = MeanGradeSummary::for_submission(&submission);
        let strengths = strengths::top_strengths(&submission, STRENGTH_LIMIT);

        let record = RecommendationRecord {
            record_id: next_record_id(),
            submitted_at,
            candidate,
            submission,
            mean,
            strengths,
        };

        let stored = self.repository.insert(record)?;

        let mut details = BTreeMap::new();
        details.insert("record_id".to_string(), stored.record_id.0.clone());
        details.insert(
            "mean_grade".to_string(),
            stored.mean.mean_grade.label().to_string(),
        );
        self.activity.record(ActivityEvent {
            action: ActivityAction::GenerateRecommendations,
            occurred_at: submitted_at,
            details,
        })?;

        Ok(stored)
    }

    /// Fetch a stored record for API responses.
    pub fn get(&self, record_id: &RecordId) -> Result<RecommendationRecord, GuidanceServiceError> {
        let record = self
            .repository
            .fetch(record_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recent records, newest first, for the admin activity feed.
    pub fn recent(&self, limit: usize) -> Result<Vec<RecommendationRecord>, GuidanceServiceError> {
        Ok(self.repository.recent(limit)?)
    }

    /// Aggregate usage analytics over the records inside a window.
    pub fn analytics(
        &self,
        range: AnalyticsRange,
    ) -> Result<AnalyticsSummary, GuidanceServiceError> {
        let records = self.repository.in_range(range.start, range.end)?;
        Ok(AnalyticsSummary::from_records(&records))
    }
}

/// Error raised by the guidance service.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceServiceError {
    #[error(transparent)]
    Incomplete(#[from] IncompleteSubmission),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Activity(#[from] ActivityError),
}
