use std::sync::Arc;

use super::common::*;
use crate::guidance::analytics::{AnalyticsRange, TimeRange};
use crate::guidance::grades::Grade;
use crate::guidance::repository::{ActivityAction, RecordId, RepositoryError};
use crate::guidance::service::{GuidanceService, GuidanceServiceError};
use chrono::Duration;

#[test]
fn submit_scores_and_persists_a_complete_submission() {
    let (service, repository, activity) = build_service();

    let record = service
        .submit(Some(candidate()), complete_submission(), submitted_at())
        .expect("submission succeeds");

    assert!(record.record_id.0.starts_with("rec-"));
    assert_eq!(record.mean.mean_grade, Grade::BPlus);
    assert_eq!(record.mean.scored_subjects, 6);
    assert_eq!(record.candidate.as_ref().map(|c| c.name.as_str()), Some("Wanjiku Njeri"));
    assert_eq!(repository.len(), 1);

    let events = activity.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, ActivityAction::GenerateRecommendations);
    assert_eq!(events[0].details.get("mean_grade").map(String::as_str), Some("B+"));
}

#[test]
fn submit_links_the_mean_grade_to_its_bundle() {
    let (service, _, _) = build_service();

    let record = service
        .submit(None, vocational_submission(), submitted_at())
        .expect("submission succeeds");

    assert_eq!(record.mean.mean_grade, Grade::C);
    assert_eq!(record.bundle().title, "Vocational Path");

    let view = record.view();
    assert_eq!(view.mean_grade, "C");
    assert_eq!(view.recommendation.title, "Vocational Path");
}

#[test]
fn submit_rejects_incomplete_submissions_before_scoring() {
    let (service, repository, activity) = build_service();

    let error = service
        .submit(None, incomplete_submission(), submitted_at())
        .expect_err("technical group is empty");

    assert!(matches!(error, GuidanceServiceError::Incomplete(_)));
    assert_eq!(repository.len(), 0);
    assert!(activity.events().is_empty());
}

#[test]
fn submit_surfaces_repository_conflicts() {
    let service = GuidanceService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryActivity::default()),
    );

    let error = service
        .submit(None, complete_submission(), submitted_at())
        .expect_err("repository rejects everything");

    assert!(matches!(
        error,
        GuidanceServiceError::Repository(RepositoryError::Conflict)
    ));
}

#[test]
fn get_returns_not_found_for_unknown_records() {
    let (service, _, _) = build_service();

    let error = service
        .get(&RecordId("rec-999999".to_string()))
        .expect_err("nothing stored");

    assert!(matches!(
        error,
        GuidanceServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn analytics_aggregates_the_stored_records() {
    let (service, _, _) = build_service();

    service
        .submit(None, complete_submission(), submitted_at())
        .expect("first submission");
    service
        .submit(None, vocational_submission(), submitted_at() + Duration::days(1))
        .expect("second submission");

    let range = AnalyticsRange::ending_at(submitted_at() + Duration::days(2), TimeRange::Week);
    let summary = service.analytics(range).expect("summary builds");

    assert_eq!(summary.total_submissions, 2);
    assert_eq!(summary.submission_trend.len(), 2);

    let b_plus = summary
        .grade_distribution
        .iter()
        .find(|band| band.grade == "B+")
        .expect("B+ band present");
    assert_eq!(b_plus.count, 1);
    let c_band = summary
        .grade_distribution
        .iter()
        .find(|band| band.grade == "C")
        .expect("C band present");
    assert_eq!(c_band.count, 1);
}

#[test]
fn analytics_ignores_records_outside_the_window() {
    let (service, _, _) = build_service();

    service
        .submit(None, complete_submission(), submitted_at())
        .expect("submission succeeds");

    let range = AnalyticsRange::ending_at(submitted_at() + Duration::days(60), TimeRange::Week);
    let summary = service.analytics(range).expect("summary builds");

    assert_eq!(summary.total_submissions, 0);
}
