use serde::{Deserialize, Serialize};

use super::subjects::{StudentSubmission, Subject};

/// Broad academic areas used to summarize where a candidate performs best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthArea {
    Languages,
    Sciences,
    Humanities,
    Commerce,
    Technical,
}

impl StrengthArea {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Languages,
            Self::Sciences,
            Self::Humanities,
            Self::Commerce,
            Self::Technical,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Sciences => "Sciences",
            Self::Humanities => "Humanities",
            Self::Commerce => "Commerce",
            Self::Technical => "Technical",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Languages => 0,
            Self::Sciences => 1,
            Self::Humanities => 2,
            Self::Commerce => 3,
            Self::Technical => 4,
        }
    }
}

/// Area a subject contributes to. Mathematics counts with the sciences even
/// though the form files it under the compulsory group.
pub const fn area_for(subject: Subject) -> StrengthArea {
    match subject {
        Subject::English | Subject::Kiswahili => StrengthArea::Languages,
        Subject::Mathematics | Subject::Biology | Subject::Chemistry | Subject::Physics => {
            StrengthArea::Sciences
        }
        Subject::History | Subject::Geography | Subject::Cre | Subject::Ire | Subject::Hre => {
            StrengthArea::Humanities
        }
        Subject::BusinessStudies => StrengthArea::Commerce,
        Subject::Agriculture
        | Subject::ComputerStudies
        | Subject::HomeScience
        | Subject::ArtDesign => StrengthArea::Technical,
    }
}

/// Rank areas by average scored points and keep the strongest `limit`, with
/// ties broken by the fixed area order.
pub fn top_strengths(submission: &StudentSubmission, limit: usize) -> Vec<StrengthArea> {
    let mut totals = [0u32; 5];
    let mut counts = [0u32; 5];

    for (subject, grade) in submission.scored() {
        let index = area_for(subject).index();
        totals[index] += u32::from(grade.points());
        counts[index] += 1;
    }

    let mut ranked: Vec<(StrengthArea, f64)> = StrengthArea::ordered()
        .into_iter()
        .filter(|area| counts[area.index()] > 0)
        .map(|area| {
            let average = f64::from(totals[area.index()]) / f64::from(counts[area.index()]);
            (area, average)
        })
        .collect();

    ranked.sort_by(|left, right| {
        right
            .1
            .total_cmp(&left.1)
            .then_with(|| left.0.index().cmp(&right.0.index()))
    });
    ranked.truncate(limit);
    ranked.into_iter().map(|(area, _)| area).collect()
}
