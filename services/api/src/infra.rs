use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use career_compass::guidance::{
    ActivityError, ActivityEvent, ActivityRecorder, RecommendationRecord, RecommendationRepository,
    RecordId, RepositoryError,
};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRecommendationRepository {
    records: Arc<Mutex<HashMap<RecordId, RecommendationRecord>>>,
}

impl RecommendationRepository for InMemoryRecommendationRepository {
    fn insert(
        &self,
        record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.record_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.record_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<RecommendationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<RecommendationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
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
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| start <= record.submitted_at && record.submitted_at < end)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryActivityLog {
    events: Arc<Mutex<Vec<ActivityEvent>>>,
}

impl ActivityRecorder for InMemoryActivityLog {
    fn record(&self, event: ActivityEvent) -> Result<(), ActivityError> {
        let mut guard = self.events.lock().expect("activity mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

#[cfg(test)]
impl InMemoryActivityLog {
    pub(crate) fn events(&self) -> Vec<ActivityEvent> {
        self.events.lock().expect("activity mutex poisoned").clone()
    }
}
