use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::grades::Grade;
use super::repository::RecommendationRecord;
use super::strengths::StrengthArea;

/// Named windows matching the dashboard's range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub const fn days(self) -> u64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::Month
    }
}

/// Half-open query window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AnalyticsRange {
    /// Window of the named length ending at `end`.
    pub fn ending_at(end: DateTime<Utc>, range: TimeRange) -> Self {
        let start = end.checked_sub_days(Days::new(range.days())).unwrap_or(end);
        Self { start, end }
    }

    /// Window covering the given dates inclusively.
    pub fn between_dates(start: NaiveDate, end: NaiveDate) -> Self {
        let start_at = day_start(start);
        let end_at = end
            .checked_add_days(Days::new(1))
            .map(day_start)
            .unwrap_or_else(|| day_start(end));
        Self {
            start: start_at,
            end: end_at,
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeBandCount {
    pub grade: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerCount {
    pub career: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthCount {
    pub strength: &'static str,
    pub count: usize,
}

const CAREER_POPULARITY_LIMIT: usize = 10;

/// Aggregates backing the admin dashboard charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSummary {
    pub total_submissions: usize,
    pub submission_trend: Vec<DailyCount>,
    pub grade_distribution: Vec<GradeBandCount>,
    pub career_popularity: Vec<CareerCount>,
    pub strength_mix: Vec<StrengthCount>,
}

impl AnalyticsSummary {
    /// Fold a set of stored records into chart-ready aggregates.
    pub fn from_records(records: &[RecommendationRecord]) -> Self {
        let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        let mut grade_counts = [0usize; 12];
        let mut career_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut strength_counts = [0usize; 5];

        for record in records {
            *by_day.entry(record.submitted_at.date_naive()).or_default() += 1;
            grade_counts[record.mean.mean_grade.scale_index()] += 1;

            for career in record.bundle().careers {
                *career_counts.entry(career).or_default() += 1;
            }
            for area in &record.strengths {
                strength_counts[area.index()] += 1;
            }
        }

        let submission_trend = by_day
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect();

        let grade_distribution = Grade::ordered()
            .into_iter()
            .map(|grade| GradeBandCount {
                grade: grade.label(),
                count: grade_counts[grade.scale_index()],
            })
            .collect();

        let mut career_popularity: Vec<CareerCount> = career_counts
            .into_iter()
            .map(|(career, count)| CareerCount { career, count })
            .collect();
        career_popularity.sort_by(|left, right| {
            right
                .count
                .cmp(&left.count)
                .then_with(|| left.career.cmp(right.career))
        });
        career_popularity.truncate(CAREER_POPULARITY_LIMIT);

        let strength_mix = StrengthArea::ordered()
            .into_iter()
            .filter(|area| strength_counts[area.index()] > 0)
            .map(|area| StrengthCount {
                strength: area.label(),
                count: strength_counts[area.index()],
            })
            .collect();

        Self {
            total_submissions: records.len(),
            submission_trend,
            grade_distribution,
            career_popularity,
            strength_mix,
        }
    }
}
