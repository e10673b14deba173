//! Mean-grade scoring and career recommendation workflows.
//!
//! The pipeline is a pure function composition: a validated submission is
//! averaged into a mean letter grade, and the grade keys into a static table
//! of recommendation bundles. The service facade layers persistence and
//! usage-event logging on top for the HTTP surface.

pub mod analytics;
pub mod cohort;
pub mod grades;
pub mod mean;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod service;
pub mod strengths;
pub mod subjects;
pub mod validation;

#[cfg(test)]
mod tests;

pub use analytics::{AnalyticsRange, AnalyticsSummary, GradeBandCount, TimeRange};
pub use grades::{Grade, InvalidGrade, SubjectGrade};
pub use mean::MeanGradeSummary;
pub use recommendations::RecommendationBundle;
pub use repository::{
    ActivityAction, ActivityError, ActivityEvent, ActivityRecorder, RecommendationRecord,
    RecommendationRepository, RecommendationView, RecordId, RepositoryError,
};
pub use router::guidance_router;
pub use service::{GuidanceService, GuidanceServiceError};
pub use strengths::{top_strengths, StrengthArea};
pub use subjects::{CandidateProfile, StudentSubmission, Subject, SubjectCategory, UnknownSubject};
pub use validation::{
    category_satisfied, check_submission, ensure_complete, CompletenessReport,
    CompletenessViolation, IncompleteSubmission,
};
