use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raised when a grade token falls outside the examination scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grade token '{token}'")]
pub struct InvalidGrade {
    pub token: String,
}

/// KCSE letter grades ordered from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    E,
}

impl Grade {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::A,
            Self::AMinus,
            Self::BPlus,
            Self::B,
            Self::BMinus,
            Self::CPlus,
            Self::C,
            Self::CMinus,
            Self::DPlus,
            Self::D,
            Self::DMinus,
            Self::E,
        ]
    }

    /// Examination points awarded for this grade.
    pub const fn points(self) -> u8 {
        match self {
            Self::A => 12,
            Self::AMinus => 11,
            Self::BPlus => 10,
            Self::B => 9,
            Self::BMinus => 8,
            Self::CPlus => 7,
            Self::C => 6,
            Self::CMinus => 5,
            Self::DPlus => 4,
            Self::D => 3,
            Self::DMinus => 2,
            Self::E => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::E => "E",
        }
    }

    /// Position in the scale, 0 for A through 11 for E.
    pub const fn scale_index(self) -> usize {
        match self {
            Self::A => 0,
            Self::AMinus => 1,
            Self::BPlus => 2,
            Self::B => 3,
            Self::BMinus => 4,
            Self::CPlus => 5,
            Self::C => 6,
            Self::CMinus => 7,
            Self::DPlus => 8,
            Self::D => 9,
            Self::DMinus => 10,
            Self::E => 11,
        }
    }

    /// Lower bound of the band that resolves to this grade, anchored at the
    /// midpoint between adjacent integer point values.
    pub fn band_floor(self) -> f64 {
        f64::from(self.points()) - 0.5
    }

    /// Collapse a mean point value back to a letter band.
    ///
    /// Bands are closed above and open below, so a mean sitting exactly on a
    /// boundary resolves to the stronger grade. Means below the E floor only
    /// arise when nothing was scored; they settle on E.
    pub fn from_mean_points(mean_points: f64) -> Self {
        for grade in Self::ordered() {
            if mean_points >= grade.band_floor() {
                return grade;
            }
        }
        Self::E
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = InvalidGrade;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "D-" => Ok(Self::DMinus),
            "E" => Ok(Self::E),
            _ => Err(InvalidGrade {
                token: raw.trim().to_string(),
            }),
        }
    }
}

impl Serialize for Grade {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A grade slot on the results form: either an awarded grade or the
/// "not taken" sentinel. The sentinel is excluded from scoring entirely,
/// never scored as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectGrade {
    Graded(Grade),
    NotTaken,
}

impl SubjectGrade {
    pub const NOT_TAKEN_TOKEN: &'static str = "not_taken";

    pub const fn grade(self) -> Option<Grade> {
        match self {
            Self::Graded(grade) => Some(grade),
            Self::NotTaken => None,
        }
    }

    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Graded(_))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Graded(grade) => grade.label(),
            Self::NotTaken => Self::NOT_TAKEN_TOKEN,
        }
    }
}

impl From<Grade> for SubjectGrade {
    fn from(grade: Grade) -> Self {
        Self::Graded(grade)
    }
}

impl fmt::Display for SubjectGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SubjectGrade {
    type Err = InvalidGrade;

    /// The original form submitted `not_taken`; result slips use `X` for an
    /// ungraded paper. Both mean "excluded from the mean".
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        if token.eq_ignore_ascii_case(Self::NOT_TAKEN_TOKEN) || token.eq_ignore_ascii_case("x") {
            return Ok(Self::NotTaken);
        }
        token.parse::<Grade>().map(Self::Graded)
    }
}

impl Serialize for SubjectGrade {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for SubjectGrade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
