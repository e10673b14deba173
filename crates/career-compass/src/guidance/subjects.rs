use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::grades::{Grade, SubjectGrade};

/// Examination subject groups used on the results form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectCategory {
    Compulsory,
    Sciences,
    Humanities,
    Technical,
}

impl SubjectCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Compulsory,
            Self::Sciences,
            Self::Humanities,
            Self::Technical,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compulsory => "Compulsory",
            Self::Sciences => "Sciences",
            Self::Humanities => "Humanities",
            Self::Technical => "Technical",
        }
    }

    /// Compulsory subjects must all carry a grade; elective groups need at
    /// least one graded subject each.
    pub const fn requires_every_subject(self) -> bool {
        matches!(self, Self::Compulsory)
    }
}

impl fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a subject token is not part of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subject '{token}'")]
pub struct UnknownSubject {
    pub token: String,
}

/// The fixed subject catalogue offered on the results form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    English,
    Kiswahili,
    Mathematics,
    Biology,
    Chemistry,
    Physics,
    History,
    Geography,
    Cre,
    Ire,
    Hre,
    Agriculture,
    BusinessStudies,
    ComputerStudies,
    HomeScience,
    ArtDesign,
}

impl Subject {
    pub const fn ordered() -> [Self; 16] {
        [
            Self::English,
            Self::Kiswahili,
            Self::Mathematics,
            Self::Biology,
            Self::Chemistry,
            Self::Physics,
            Self::History,
            Self::Geography,
            Self::Cre,
            Self::Ire,
            Self::Hre,
            Self::Agriculture,
            Self::BusinessStudies,
            Self::ComputerStudies,
            Self::HomeScience,
            Self::ArtDesign,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Kiswahili => "Kiswahili",
            Self::Mathematics => "Mathematics",
            Self::Biology => "Biology",
            Self::Chemistry => "Chemistry",
            Self::Physics => "Physics",
            Self::History => "History",
            Self::Geography => "Geography",
            Self::Cre => "CRE",
            Self::Ire => "IRE",
            Self::Hre => "HRE",
            Self::Agriculture => "Agriculture",
            Self::BusinessStudies => "Business Studies",
            Self::ComputerStudies => "Computer Studies",
            Self::HomeScience => "Home Science",
            Self::ArtDesign => "Art & Design",
        }
    }

    /// Form key as submitted by clients (`business_studies`, `cre`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Kiswahili => "kiswahili",
            Self::Mathematics => "mathematics",
            Self::Biology => "biology",
            Self::Chemistry => "chemistry",
            Self::Physics => "physics",
            Self::History => "history",
            Self::Geography => "geography",
            Self::Cre => "cre",
            Self::Ire => "ire",
            Self::Hre => "hre",
            Self::Agriculture => "agriculture",
            Self::BusinessStudies => "business_studies",
            Self::ComputerStudies => "computer_studies",
            Self::HomeScience => "home_science",
            Self::ArtDesign => "art_design",
        }
    }

    pub const fn category(self) -> SubjectCategory {
        match self {
            Self::English | Self::Kiswahili | Self::Mathematics => SubjectCategory::Compulsory,
            Self::Biology | Self::Chemistry | Self::Physics => SubjectCategory::Sciences,
            Self::History | Self::Geography | Self::Cre | Self::Ire | Self::Hre => {
                SubjectCategory::Humanities
            }
            Self::Agriculture
            | Self::BusinessStudies
            | Self::ComputerStudies
            | Self::HomeScience
            | Self::ArtDesign => SubjectCategory::Technical,
        }
    }

    pub fn in_category(category: SubjectCategory) -> impl Iterator<Item = Self> {
        Self::ordered()
            .into_iter()
            .filter(move |subject| subject.category() == category)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        for subject in Self::ordered() {
            if token.eq_ignore_ascii_case(subject.key()) || token.eq_ignore_ascii_case(subject.label())
            {
                return Ok(subject);
            }
        }
        Err(UnknownSubject {
            token: token.to_string(),
        })
    }
}

/// Optional bio-data captured on the first step of the results form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub school: String,
    pub year_of_completion: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
}

/// Full set of grade selections across the four categories.
///
/// Absent subjects read exactly like the sentinel; insertion order is
/// irrelevant and each subject holds at most one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentSubmission {
    grades: BTreeMap<Subject, SubjectGrade>,
}

impl StudentSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grade(mut self, subject: Subject, grade: SubjectGrade) -> Self {
        self.set(subject, grade);
        self
    }

    pub fn set(&mut self, subject: Subject, grade: SubjectGrade) {
        self.grades.insert(subject, grade);
    }

    /// Grade recorded for a subject; absent entries read as the sentinel.
    pub fn grade(&self, subject: Subject) -> SubjectGrade {
        self.grades
            .get(&subject)
            .copied()
            .unwrap_or(SubjectGrade::NotTaken)
    }

    /// Subjects carrying a real grade, in catalogue order.
    pub fn scored(&self) -> impl Iterator<Item = (Subject, Grade)> + '_ {
        Subject::ordered().into_iter().filter_map(move |subject| {
            self.grade(subject).grade().map(|grade| (subject, grade))
        })
    }

    pub fn scored_in(
        &self,
        category: SubjectCategory,
    ) -> impl Iterator<Item = (Subject, Grade)> + '_ {
        self.scored()
            .filter(move |(subject, _)| subject.category() == category)
    }

    pub fn is_empty(&self) -> bool {
        self.scored().next().is_none()
    }
}
