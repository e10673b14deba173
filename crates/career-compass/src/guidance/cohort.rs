//! Batch import of a class's results from a CSV export.
//!
//! The sheet carries one row per student: a `Name` column plus one column per
//! subject label. Blank cells and the sentinel tokens mean "not taken".

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::analytics::GradeBandCount;
use super::grades::{Grade, InvalidGrade, SubjectGrade};
use super::mean::MeanGradeSummary;
use super::subjects::{StudentSubmission, Subject};
use super::validation;

/// Error raised while importing a results sheet.
#[derive(Debug, thiserror::Error)]
pub enum CohortImportError {
    #[error("failed to read results csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to open results csv: {0}")]
    Io(#[from] std::io::Error),
    #[error("row {row} ({name}): {source}")]
    Grade {
        row: usize,
        name: String,
        #[source]
        source: InvalidGrade,
    },
}

/// One student's parsed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortEntry {
    pub name: String,
    pub submission: StudentSubmission,
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<CohortEntry>, CohortImportError> {
    let file = File::open(path)?;
    parse_results(file)
}

pub fn parse_results<R: Read>(reader: R) -> Result<Vec<CohortEntry>, CohortImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, row) in csv_reader.deserialize::<CohortRow>().enumerate() {
        let row = row?;
        // The header occupies sheet row 1.
        entries.push(row.into_entry(index + 2)?);
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct CohortRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "English", default, deserialize_with = "empty_string_as_none")]
    english: Option<String>,
    #[serde(rename = "Kiswahili", default, deserialize_with = "empty_string_as_none")]
    kiswahili: Option<String>,
    #[serde(rename = "Mathematics", default, deserialize_with = "empty_string_as_none")]
    mathematics: Option<String>,
    #[serde(rename = "Biology", default, deserialize_with = "empty_string_as_none")]
    biology: Option<String>,
    #[serde(rename = "Chemistry", default, deserialize_with = "empty_string_as_none")]
    chemistry: Option<String>,
    #[serde(rename = "Physics", default, deserialize_with = "empty_string_as_none")]
    physics: Option<String>,
    #[serde(rename = "History", default, deserialize_with = "empty_string_as_none")]
    history: Option<String>,
    #[serde(rename = "Geography", default, deserialize_with = "empty_string_as_none")]
    geography: Option<String>,
    #[serde(rename = "CRE", default, deserialize_with = "empty_string_as_none")]
    cre: Option<String>,
    #[serde(rename = "IRE", default, deserialize_with = "empty_string_as_none")]
    ire: Option<String>,
    #[serde(rename = "HRE", default, deserialize_with = "empty_string_as_none")]
    hre: Option<String>,
    #[serde(rename = "Agriculture", default, deserialize_with = "empty_string_as_none")]
    agriculture: Option<String>,
    #[serde(
        rename = "Business Studies",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    business_studies: Option<String>,
    #[serde(
        rename = "Computer Studies",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    computer_studies: Option<String>,
    #[serde(
        rename = "Home Science",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    home_science: Option<String>,
    #[serde(
        rename = "Art & Design",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    art_design: Option<String>,
}

impl CohortRow {
    fn into_entry(self, row: usize) -> Result<CohortEntry, CohortImportError> {
        let mut submission = StudentSubmission::new();
        let columns = [
            (Subject::English, self.english),
            (Subject::Kiswahili, self.kiswahili),
            (Subject::Mathematics, self.mathematics),
            (Subject::Biology, self.biology),
            (Subject::Chemistry, self.chemistry),
            (Subject::Physics, self.physics),
            (Subject::History, self.history),
            (Subject::Geography, self.geography),
            (Subject::Cre, self.cre),
            (Subject::Ire, self.ire),
            (Subject::Hre, self.hre),
            (Subject::Agriculture, self.agriculture),
            (Subject::BusinessStudies, self.business_studies),
            (Subject::ComputerStudies, self.computer_studies),
            (Subject::HomeScience, self.home_science),
            (Subject::ArtDesign, self.art_design),
        ];

        for (subject, cell) in columns {
            if let Some(token) = cell {
                let grade =
                    token
                        .parse::<SubjectGrade>()
                        .map_err(|source| CohortImportError::Grade {
                            row,
                            name: self.name.clone(),
                            source,
                        })?;
                submission.set(subject, grade);
            }
        }

        Ok(CohortEntry {
            name: self.name,
            submission,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Per-student outcome for the cohort listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortStudentOutcome {
    pub name: String,
    pub mean: MeanGradeSummary,
    pub complete: bool,
}

/// Aggregate view over an imported class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortReport {
    pub students: Vec<CohortStudentOutcome>,
    pub band_distribution: Vec<GradeBandCount>,
    pub cohort_mean_points: f64,
}

impl CohortReport {
    pub fn build(entries: &[CohortEntry]) -> Self {
        let mut students = Vec::with_capacity(entries.len());
        let mut band_counts = [0usize; 12];
        let mut total = 0.0;

        for entry in entries {
            let mean = MeanGradeSummary::for_submission(&entry.submission);
            let complete = validation::check_submission(&entry.submission).is_complete();
            band_counts[mean.mean_grade.scale_index()] += 1;
            total += mean.mean_points;
            students.push(CohortStudentOutcome {
                name: entry.name.clone(),
                mean,
                complete,
            });
        }

        let band_distribution = Grade::ordered()
            .into_iter()
            .map(|grade| GradeBandCount {
                grade: grade.label(),
                count: band_counts[grade.scale_index()],
            })
            .collect();

        let cohort_mean_points = if students.is_empty() {
            0.0
        } else {
            total / students.len() as f64
        };

        Self {
            students,
            band_distribution,
            cohort_mean_points,
        }
    }
}
