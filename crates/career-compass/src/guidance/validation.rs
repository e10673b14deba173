use std::fmt;

use serde::Serialize;

use super::subjects::{StudentSubmission, Subject, SubjectCategory};

/// A single completeness failure surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletenessViolation {
    #[error("compulsory subject {subject} has no grade")]
    MissingCompulsory { subject: Subject },
    #[error("no {category} subject carries a grade")]
    EmptyElectiveGroup { category: SubjectCategory },
}

/// Pass/fail outcome for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCheck {
    pub category: SubjectCategory,
    pub category_label: &'static str,
    pub graded: usize,
    pub satisfied: bool,
}

/// Result of running the completeness predicate across all four categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub categories: Vec<CategoryCheck>,
    pub violations: Vec<CompletenessViolation>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Completeness rule for one category in isolation: compulsory subjects must
/// all be graded, elective groups need at least one graded subject.
pub fn category_satisfied(submission: &StudentSubmission, category: SubjectCategory) -> bool {
    if category.requires_every_subject() {
        Subject::in_category(category).all(|subject| submission.grade(subject).is_scored())
    } else {
        submission.scored_in(category).next().is_some()
    }
}

/// Run the per-category predicate across the whole submission.
pub fn check_submission(submission: &StudentSubmission) -> CompletenessReport {
    let mut categories = Vec::with_capacity(SubjectCategory::ordered().len());
    let mut violations = Vec::new();

    for category in SubjectCategory::ordered() {
        let graded = submission.scored_in(category).count();
        let satisfied = category_satisfied(submission, category);

        if !satisfied {
            if category.requires_every_subject() {
                for subject in Subject::in_category(category) {
                    if !submission.grade(subject).is_scored() {
                        violations.push(CompletenessViolation::MissingCompulsory { subject });
                    }
                }
            } else {
                violations.push(CompletenessViolation::EmptyElectiveGroup { category });
            }
        }

        categories.push(CategoryCheck {
            category,
            category_label: category.label(),
            graded,
            satisfied,
        });
    }

    CompletenessReport {
        categories,
        violations,
    }
}

/// Reject a submission that fails any category rule, keeping the full report
/// so HTTP callers can render every violation.
pub fn ensure_complete(submission: &StudentSubmission) -> Result<(), IncompleteSubmission> {
    let report = check_submission(submission);
    if report.is_complete() {
        Ok(())
    } else {
        Err(IncompleteSubmission { report })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteSubmission {
    pub report: CompletenessReport,
}

impl fmt::Display for IncompleteSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self
            .report
            .violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "incomplete submission: {summary}")
    }
}

impl std::error::Error for IncompleteSubmission {}
