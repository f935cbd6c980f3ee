use std::{
    collections::BTreeMap,
    fmt::Display,
    num::ParseFloatError,
    ops::{Index, IndexMut},
    str::FromStr,
};

use enum_iterator::Sequence;
use enum_map::{Enum, EnumMap};
use joinery::JoinableIterator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    Sequence,
    Enum,
)]
pub enum Subject {
    #[serde(rename = "japanese")]
    Japanese,
    #[serde(rename = "math")]
    Mathematics,
    #[serde(rename = "english")]
    English,
    #[serde(rename = "science")]
    Science,
    #[serde(rename = "social")]
    SocialStudies,
    #[serde(rename = "music")]
    Music,
    #[serde(rename = "art")]
    Art,
    #[serde(rename = "pe")]
    PhysicalEducation,
    #[serde(rename = "tech")]
    TechnologyHomeEconomics,
}
impl Subject {
    pub fn group(self) -> SubjectGroup {
        use Subject::*;
        match self {
            Japanese | Mathematics | English | Science | SocialStudies => SubjectGroup::Core,
            Music | Art | PhysicalEducation | TechnologyHomeEconomics => SubjectGroup::Practical,
        }
    }

    pub fn name_ja(self) -> &'static str {
        use Subject::*;
        match self {
            Japanese => "国語",
            Mathematics => "数学",
            English => "英語",
            Science => "理科",
            SocialStudies => "社会",
            Music => "音楽",
            Art => "美術",
            PhysicalEducation => "保健体育",
            TechnologyHomeEconomics => "技術・家庭",
        }
    }
}

/// The five "core" subjects and the four "practical" ones.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, Sequence, Enum,
)]
pub enum SubjectGroup {
    Core,
    Practical,
}
impl SubjectGroup {
    pub fn subjects(self) -> impl Iterator<Item = Subject> {
        enum_iterator::all::<Subject>().filter(move |s| s.group() == self)
    }

    pub fn subject_count(self) -> usize {
        self.subjects().count()
    }

    pub fn name_ja(self) -> &'static str {
        match self {
            SubjectGroup::Core => "主要5教科",
            SubjectGroup::Practical => "実技4教科",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum GradeScale {
    FivePoint,
    TenPoint,
}
impl GradeScale {
    pub fn ceiling(self) -> u8 {
        match self {
            GradeScale::FivePoint => 5,
            GradeScale::TenPoint => 10,
        }
    }

    /// Clamps a raw input into `1..=ceiling` and rounds it to an integer.
    /// Nothing is rejected: NaN counts as the lowest grade.
    pub fn clamp(self, raw: f64) -> u8 {
        if raw.is_nan() {
            return 1;
        }
        raw.clamp(1.0, f64::from(self.ceiling())).round() as u8
    }
}

/// Raw grades as typed by the user, one per subject.
///
/// Values are kept unvalidated; the scoring functions clamp them.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Subject, Option<f64>>",
    into = "BTreeMap<Subject, f64>"
)]
pub struct GradesRecord(EnumMap<Subject, f64>);

impl GradesRecord {
    pub fn new(grades: EnumMap<Subject, f64>) -> Self {
        Self(grades)
    }

    pub fn uniform(grade: f64) -> Self {
        Self(EnumMap::from_fn(|_| grade))
    }

    pub fn get(&self, subject: Subject) -> f64 {
        self.0[subject]
    }

    pub fn set(&mut self, subject: Subject, grade: f64) {
        self.0[subject] = grade;
    }

    pub fn with(mut self, subject: Subject, grade: f64) -> Self {
        self.set(subject, grade);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subject, f64)> + Clone + '_ {
        self.0.iter().map(|(subject, &grade)| (subject, grade))
    }
}

impl Default for GradesRecord {
    fn default() -> Self {
        Self::uniform(3.0)
    }
}

impl Index<Subject> for GradesRecord {
    type Output = f64;
    fn index(&self, subject: Subject) -> &f64 {
        &self.0[subject]
    }
}
impl IndexMut<Subject> for GradesRecord {
    fn index_mut(&mut self, subject: Subject) -> &mut f64 {
        &mut self.0[subject]
    }
}

// Missing or null entries become 0, which the engine clamps up to the minimum grade.
impl From<BTreeMap<Subject, Option<f64>>> for GradesRecord {
    fn from(map: BTreeMap<Subject, Option<f64>>) -> Self {
        Self(EnumMap::from_fn(|subject| {
            map.get(&subject).copied().flatten().unwrap_or(0.0)
        }))
    }
}
impl From<GradesRecord> for BTreeMap<Subject, f64> {
    fn from(record: GradesRecord) -> Self {
        record.iter().collect()
    }
}

#[derive(PartialEq, Eq, Debug, Error)]
pub enum GradesParseError {
    #[error("Expected 9 grades, found {0}")]
    WrongCount(usize),
    #[error("Invalid grade {value:?}: {source}")]
    InvalidNumber {
        value: String,
        source: ParseFloatError,
    },
}

/// Parses nine grades separated by commas or whitespace, in subject order
/// (Japanese, math, English, science, social, music, art, PE, tech).
impl FromStr for GradesRecord {
    type Err = GradesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|x| !x.is_empty())
            .map(|x| {
                x.parse::<f64>()
                    .map_err(|source| GradesParseError::InvalidNumber {
                        value: x.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != Subject::CARDINALITY {
            return Err(GradesParseError::WrongCount(values.len()));
        }
        let mut record = Self::uniform(0.0);
        for (subject, value) in enum_iterator::all::<Subject>().zip(values) {
            record.set(subject, value);
        }
        Ok(record)
    }
}

impl Display for GradesRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().map(|(_, grade)| grade).join_with(','))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{GradeScale, GradesParseError, GradesRecord, Subject, SubjectGroup};

    #[test]
    fn groups() {
        assert_eq!(SubjectGroup::Core.subject_count(), 5);
        assert_eq!(SubjectGroup::Practical.subject_count(), 4);
        assert_eq!(Subject::Music.group(), SubjectGroup::Practical);
        assert_eq!(Subject::SocialStudies.group(), SubjectGroup::Core);
    }

    #[test]
    fn clamp_grade() {
        let five = GradeScale::FivePoint;
        assert_eq!(five.clamp(0.0), 1);
        assert_eq!(five.clamp(-5.0), 1);
        assert_eq!(five.clamp(999.0), 5);
        assert_eq!(five.clamp(3.4), 3);
        assert_eq!(five.clamp(3.5), 4);
        assert_eq!(five.clamp(f64::NAN), 1);
        assert_eq!(five.clamp(f64::INFINITY), 5);
        assert_eq!(GradeScale::TenPoint.clamp(8.0), 8);
        assert_eq!(GradeScale::TenPoint.clamp(12.0), 10);
    }

    #[test]
    fn parse_grades() {
        let record: GradesRecord = "5,4,3,2,1, 5 4 3 2".parse().unwrap();
        assert_eq!(record[Subject::Japanese], 5.0);
        assert_eq!(record[Subject::SocialStudies], 1.0);
        assert_eq!(record[Subject::TechnologyHomeEconomics], 2.0);
        assert_eq!(record.to_string(), "5,4,3,2,1,5,4,3,2");

        assert_eq!(
            "5,4,3".parse::<GradesRecord>(),
            Err(GradesParseError::WrongCount(3))
        );
        assert!(matches!(
            "5,4,3,x,1,5,4,3,2".parse::<GradesRecord>(),
            Err(GradesParseError::InvalidNumber { value, .. }) if value == "x"
        ));
    }

    #[test]
    fn deserialize_with_missing_keys() {
        let record: GradesRecord =
            serde_json::from_str(r#"{"japanese": 4, "math": 5, "pe": null}"#).unwrap();
        assert_eq!(record[Subject::Japanese], 4.0);
        assert_eq!(record[Subject::Mathematics], 5.0);
        assert_eq!(record[Subject::PhysicalEducation], 0.0);
        assert_eq!(record[Subject::Art], 0.0);

        let json = serde_json::to_value(GradesRecord::uniform(3.0)).unwrap();
        let expected: BTreeMap<String, f64> = [
            "japanese", "math", "english", "science", "social", "music", "art", "pe", "tech",
        ]
        .into_iter()
        .map(|key| (key.to_owned(), 3.0))
        .collect();
        assert_eq!(json, serde_json::to_value(expected).unwrap());
    }
}
