use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::guidance::grades::Grade;
use crate::guidance::repository::{
    ActivityError, ActivityEvent, ActivityRecorder, RecommendationRecord, RecommendationRepository,
    RecordId, RepositoryError,
};
use crate::guidance::service::GuidanceService;
use crate::guidance::subjects::{CandidateProfile, StudentSubmission, Subject};
use chrono::{DateTime, TimeZone, Utc};

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<RecordId, RecommendationRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("lock").len()
    }
}

impl RecommendationRepository for MemoryRepository {
    fn insert(
        &self,
        record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.record_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.record_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<RecommendationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<RecommendationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        let mut all: Vec<_> = guard.values().cloned().collect();
        all.sort_by(|left, right| right.submitted_at.cmp(&left.submitted_at));
        all.truncate(limit);
        Ok(all)
    }

    fn in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RecommendationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard
            .values()
            .filter(|record| start <= record.submitted_at && record.submitted_at < end)
            .cloned()
            .collect())
    }
}

/// Repository that refuses every insert with a conflict.
pub(super) struct ConflictRepository;

impl RecommendationRepository for ConflictRepository {
    fn insert(&self, _: RecommendationRecord) -> Result<RecommendationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _: &RecordId) -> Result<Option<RecommendationRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _: usize) -> Result<Vec<RecommendationRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn in_range(
        &self,
        _: DateTime<Utc>,
        _: DateTime<Utc>,
    ) -> Result<Vec<RecommendationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Repository that fails every call, for surfacing 5xx paths.
pub(super) struct UnavailableRepository;

impl RecommendationRepository for UnavailableRepository {
    fn insert(&self, _: RecommendationRecord) -> Result<RecommendationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }

    fn fetch(&self, _: &RecordId) -> Result<Option<RecommendationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }

    fn recent(&self, _: usize) -> Result<Vec<RecommendationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }

    fn in_range(
        &self,
        _: DateTime<Utc>,
        _: DateTime<Utc>,
    ) -> Result<Vec<RecommendationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryActivity {
    events: Arc<Mutex<Vec<ActivityEvent>>>,
}

impl MemoryActivity {
    pub(super) fn events(&self) -> Vec<ActivityEvent> {
        self.events.lock().expect("lock").clone()
    }
}

impl ActivityRecorder for MemoryActivity {
    fn record(&self, event: ActivityEvent) -> Result<(), ActivityError> {
        self.events.lock().expect("lock").push(event);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    Arc<GuidanceService<MemoryRepository, MemoryActivity>>,
    Arc<MemoryRepository>,
    Arc<MemoryActivity>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let activity = Arc::new(MemoryActivity::default());
    let service = Arc::new(GuidanceService::new(repository.clone(), activity.clone()));
    (service, repository, activity)
}

/// Complete submission averaging 59/6 ≈ 9.83, squarely inside the B+ band.
pub(super) fn complete_submission() -> StudentSubmission {
    StudentSubmission::new()
        .with_grade(Subject::English, Grade::BPlus.into())
        .with_grade(Subject::Kiswahili, Grade::B.into())
        .with_grade(Subject::Mathematics, Grade::B.into())
        .with_grade(Subject::Biology, Grade::AMinus.into())
        .with_grade(Subject::History, Grade::BPlus.into())
        .with_grade(Subject::ComputerStudies, Grade::BPlus.into())
}

/// Complete submission of straight Cs, resolving to the vocational band.
pub(super) fn vocational_submission() -> StudentSubmission {
    StudentSubmission::new()
        .with_grade(Subject::English, Grade::C.into())
        .with_grade(Subject::Kiswahili, Grade::C.into())
        .with_grade(Subject::Mathematics, Grade::C.into())
        .with_grade(Subject::Chemistry, Grade::C.into())
        .with_grade(Subject::Geography, Grade::C.into())
        .with_grade(Subject::Agriculture, Grade::C.into())
}

/// Submission missing the entire technical elective group.
pub(super) fn incomplete_submission() -> StudentSubmission {
    StudentSubmission::new()
        .with_grade(Subject::English, Grade::B.into())
        .with_grade(Subject::Kiswahili, Grade::B.into())
        .with_grade(Subject::Mathematics, Grade::B.into())
        .with_grade(Subject::Physics, Grade::B.into())
        .with_grade(Subject::Geography, Grade::B.into())
}

pub(super) fn candidate() -> CandidateProfile {
    CandidateProfile {
        name: "Wanjiku Njeri".to_string(),
        school: "Alliance High School".to_string(),
        year_of_completion: 2025,
        county: Some("Kiambu".to_string()),
    }
}

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 6, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body streams");
    serde_json::from_slice(&bytes).expect("body is json")
}
