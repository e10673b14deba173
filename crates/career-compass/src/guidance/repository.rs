use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mean::MeanGradeSummary;
use super::recommendations::RecommendationBundle;
use super::strengths::StrengthArea;
use super::subjects::{CandidateProfile, StudentSubmission};

/// Identifier wrapper for stored recommendation records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

/// Immutable snapshot of one computed recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub record_id: RecordId,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<CandidateProfile>,
    pub submission: StudentSubmission,
    pub mean: MeanGradeSummary,
    pub strengths: Vec<StrengthArea>,
}

impl RecommendationRecord {
    /// Bundle derived from the stored mean grade.
    pub fn bundle(&self) -> &'static RecommendationBundle {
        RecommendationBundle::for_grade(self.mean.mean_grade)
    }

    pub fn view(&self) -> RecommendationView {
        RecommendationView {
            record_id: self.record_id.clone(),
            submitted_at: self.submitted_at,
            mean_grade: self.mean.mean_grade.label(),
            mean_points: self.mean.mean_points,
            scored_subjects: self.mean.scored_subjects,
            strengths: self.strengths.iter().map(|area| area.label()).collect(),
            recommendation: self.bundle(),
        }
    }
}

/// Response-facing view pairing the mean summary with the static bundle.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub record_id: RecordId,
    pub submitted_at: DateTime<Utc>,
    pub mean_grade: &'static str,
    pub mean_points: f64,
    pub scored_subjects: usize,
    pub strengths: Vec<&'static str>,
    pub recommendation: &'static RecommendationBundle,
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait RecommendationRepository: Send + Sync {
    fn insert(&self, record: RecommendationRecord)
        -> Result<RecommendationRecord, RepositoryError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<RecommendationRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<RecommendationRecord>, RepositoryError>;
    fn in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RecommendationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Actions counted by the admin analytics dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    GenerateRecommendations,
    ViewRecommendations,
    CohortImport,
}

/// Usage event pushed to the activity sink alongside each operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub action: ActivityAction,
    pub occurred_at: DateTime<Utc>,
    pub details: BTreeMap<String, String>,
}

/// Trait describing outbound usage-event hooks so analytics sinks can be
/// swapped in tests.
pub trait ActivityRecorder: Send + Sync {
    fn record(&self, event: ActivityEvent) -> Result<(), ActivityError>;
}

/// Activity dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("activity sink unavailable: {0}")]
    Unavailable(String),
}
