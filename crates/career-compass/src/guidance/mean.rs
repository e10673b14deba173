use serde::{Deserialize, Serialize};

use super::grades::Grade;
use super::subjects::StudentSubmission;

/// Aggregate scoring outcome for one submission, immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanGradeSummary {
    pub mean_grade: Grade,
    pub mean_points: f64,
    pub total_points: u32,
    pub scored_subjects: usize,
}

impl MeanGradeSummary {
    /// Average the scored subjects and collapse the result back to a letter
    /// band.
    ///
    /// Sentinel entries never contribute to the count or sum regardless of
    /// category. A submission with nothing scored settles on the lowest band;
    /// the completeness check is expected to reject those before they reach
    /// here.
    pub fn for_submission(submission: &StudentSubmission) -> Self {
        let mut total_points = 0u32;
        let mut scored_subjects = 0usize;

        for (_, grade) in submission.scored() {
            total_points += u32::from(grade.points());
            scored_subjects += 1;
        }

        let mean_points = if scored_subjects == 0 {
            0.0
        } else {
            f64::from(total_points) / scored_subjects as f64
        };

        Self {
            mean_grade: Grade::from_mean_points(mean_points),
            mean_points,
            total_points,
            scored_subjects,
        }
    }
}
