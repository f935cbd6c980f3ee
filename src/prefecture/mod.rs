use chrono::NaiveDate;
use enum_iterator::Sequence;
use enum_map::{Enum, EnumMap};
use getset::CopyGetters;
use indexmap::IndexMap;
use joinery::JoinableIterator;
use lazy_format::lazy_format;
use log::trace;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::subject::{GradeScale, SubjectGroup};

mod registry;

/// Prefecture assumed when a caller (e.g. an old history entry) does not name one.
pub const DEFAULT_PREFECTURE: &str = "tokyo";

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
    Sequence,
    Enum,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Hokkaido,
    Tohoku,
    Kanto,
    Chubu,
    Kinki,
    Chugoku,
    Shikoku,
    KyushuOkinawa,
}
impl Region {
    pub fn name_ja(self) -> &'static str {
        use Region::*;
        match self {
            Hokkaido => "北海道",
            Tohoku => "東北",
            Kanto => "関東",
            Chubu => "中部",
            Kinki => "近畿",
            Chugoku => "中国",
            Shikoku => "四国",
            KyushuOkinawa => "九州・沖縄",
        }
    }
}

#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, Sequence, Enum,
)]
pub enum SchoolYear {
    First,
    Second,
    Third,
}
impl SchoolYear {
    pub fn number(self) -> u8 {
        match self {
            SchoolYear::First => 1,
            SchoolYear::Second => 2,
            SchoolYear::Third => 3,
        }
    }
}

/// Multiplier applied to each school year's subtotal; zero excludes the year.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct YearWeights(EnumMap<SchoolYear, f64>);

impl YearWeights {
    pub fn new(first: f64, second: f64, third: f64) -> Self {
        Self(EnumMap::from_array([first, second, third]))
    }

    pub fn get(self, year: SchoolYear) -> f64 {
        self.0[year]
    }

    pub fn target_years(self) -> impl Iterator<Item = SchoolYear> + Clone {
        enum_iterator::all::<SchoolYear>().filter(move |&year| self.0[year] > 0.0)
    }

    pub fn latest_target_year(self) -> Option<SchoolYear> {
        self.target_years().last()
    }

    pub fn sum(self) -> f64 {
        self.0.values().sum()
    }

    /// e.g. `中1×1・中2×1・中3×3`
    pub fn describe(self) -> String {
        self.target_years()
            .map(|year| lazy_format!("中{}×{}", year.number(), self.0[year]))
            .join_with("・")
            .to_string()
    }
}

/// How the required exam score is derived for a prefecture.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
    Sequence,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ReverseCalcKind {
    #[default]
    GenericRatio,
    OsakaTyped,
    TokyoSpeakingTest,
    KanagawaTwoYearBlend,
    ChibaKFactor,
    SaitamaRatio,
}

#[derive(Clone, Debug, TypedBuilder, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct PrefectureRule {
    code: &'static str,
    name: &'static str,
    region: Region,
    year_weights: YearWeights,
    #[builder(default = 1.0)]
    core_multiplier: f64,
    #[builder(default = 1.0)]
    practical_multiplier: f64,
    max_composite_score: u32,
    #[builder(default)]
    supports_ten_point_scale: bool,
    #[builder(default)]
    reverse_calc: ReverseCalcKind,
    description: &'static str,
    #[builder(default, setter(strip_option))]
    note: Option<&'static str>,
    source_url: &'static str,
    #[builder(default = registry::last_verified())]
    last_verified: NaiveDate,
}

impl PrefectureRule {
    pub fn multiplier(&self, group: SubjectGroup) -> f64 {
        match group {
            SubjectGroup::Core => self.core_multiplier,
            SubjectGroup::Practical => self.practical_multiplier,
        }
    }

    /// The ten-point scale is used only when asked for and supported.
    pub fn scale(&self, use_ten_point_scale: bool) -> GradeScale {
        if use_ten_point_scale && self.supports_ten_point_scale {
            GradeScale::TenPoint
        } else {
            GradeScale::FivePoint
        }
    }

    /// Name without the trailing 都/道/府/県.
    pub fn short_name(&self) -> &'static str {
        match self.name {
            "北海道" => self.name,
            name => name
                .strip_suffix(['都', '道', '府', '県'])
                .unwrap_or(name),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("Unknown prefecture: {0:?}")]
pub struct UnknownPrefecture(pub String);

static REGISTRY: Lazy<IndexMap<&'static str, PrefectureRule>> = Lazy::new(|| {
    let mut map = IndexMap::new();
    for rule in registry::rules() {
        trace!("Registering {} ({})", rule.code, rule.name);
        let previous = map.insert(rule.code, rule);
        debug_assert!(previous.is_none(), "Duplicating prefecture code");
    }
    map
});

/// Looks a rule up by its code (`tokyo`, `osaka`, ...), ignoring ASCII case.
pub fn lookup(code: &str) -> Option<&'static PrefectureRule> {
    let code = code.trim();
    REGISTRY.get(code).or_else(|| {
        REGISTRY
            .values()
            .find(|rule| rule.code.eq_ignore_ascii_case(code))
    })
}

pub fn get(code: &str) -> Result<&'static PrefectureRule, UnknownPrefecture> {
    lookup(code).ok_or_else(|| UnknownPrefecture(code.to_owned()))
}

/// Accepts a code or a Japanese name, with or without the 都道府県 suffix.
pub fn search(query: &str) -> Option<&'static PrefectureRule> {
    let query = query.trim();
    lookup(query).or_else(|| {
        REGISTRY
            .values()
            .find(|rule| rule.name == query || rule.short_name() == query)
    })
}

/// All 47 rules in JIS prefecture order.
pub fn list_all() -> impl ExactSizeIterator<Item = &'static PrefectureRule> {
    REGISTRY.values()
}

pub fn list_by_region(region: Region) -> impl Iterator<Item = &'static PrefectureRule> {
    list_all().filter(move |rule| rule.region == region)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{
        get, list_all, list_by_region, lookup, registry, search, Region, ReverseCalcKind,
        SchoolYear, YearWeights,
    };

    #[test]
    fn registry_has_47_unique_entries() {
        let rules = registry::rules();
        assert_eq!(rules.len(), 47);
        let codes: HashSet<_> = rules.iter().map(|rule| rule.code()).collect();
        assert_eq!(codes.len(), 47);
        let names: HashSet<_> = rules.iter().map(|rule| rule.name()).collect();
        assert_eq!(names.len(), 47);
        assert_eq!(list_all().len(), 47);
    }

    #[test]
    fn every_rule_is_populated() {
        for rule in list_all() {
            assert!(rule.max_composite_score() > 0, "{}", rule.code());
            assert!(rule.year_weights().target_years().next().is_some());
            assert!(rule.core_multiplier() > 0.0 && rule.practical_multiplier() > 0.0);
            assert!(!rule.description().is_empty());
            assert!(rule.source_url().starts_with("https://"));
        }
    }

    #[test]
    fn regions_cover_everything() {
        let total: usize = enum_iterator::all::<Region>()
            .map(|region| list_by_region(region).count())
            .sum();
        assert_eq!(total, 47);
        assert_eq!(list_by_region(Region::Hokkaido).count(), 1);
        assert_eq!(list_by_region(Region::Kanto).count(), 7);
        assert!(list_by_region(Region::Kinki).any(|rule| rule.code() == "osaka"));
    }

    #[test]
    fn lookup_and_search() {
        assert_eq!(lookup("tokyo").unwrap().name(), "東京都");
        assert_eq!(lookup(" Osaka ").unwrap().code(), "osaka");
        assert!(lookup("atlantis").is_none());
        assert_eq!(get("atlantis").unwrap_err().0, "atlantis");
        assert_eq!(search("神奈川").unwrap().code(), "kanagawa");
        assert_eq!(search("京都府").unwrap().code(), "kyoto");
        assert_eq!(search("北海道").unwrap().code(), "hokkaido");
        assert_eq!(search("東京").unwrap().code(), "tokyo");
    }

    #[test]
    fn special_cases() {
        let ten_point = list_all()
            .filter(|rule| rule.supports_ten_point_scale())
            .collect::<Vec<_>>();
        assert_eq!(ten_point.len(), 1);
        assert_eq!(
            ten_point[0].year_weights().target_years().collect::<Vec<_>>(),
            [SchoolYear::Third]
        );

        assert!(list_all().any(|rule| rule.practical_multiplier() == 20.0
            && rule.core_multiplier() == 2.0));
        assert!(list_all().any(|rule| rule.note().is_some()));

        for (code, kind) in [
            ("osaka", ReverseCalcKind::OsakaTyped),
            ("tokyo", ReverseCalcKind::TokyoSpeakingTest),
            ("kanagawa", ReverseCalcKind::KanagawaTwoYearBlend),
            ("chiba", ReverseCalcKind::ChibaKFactor),
            ("saitama", ReverseCalcKind::SaitamaRatio),
            ("hokkaido", ReverseCalcKind::GenericRatio),
        ] {
            assert_eq!(lookup(code).unwrap().reverse_calc(), kind);
        }
    }

    #[test]
    fn year_weights() {
        let weights = YearWeights::new(0.0, 1.0, 2.0);
        assert_eq!(
            weights.target_years().collect::<Vec<_>>(),
            [SchoolYear::Second, SchoolYear::Third]
        );
        assert_eq!(weights.latest_target_year(), Some(SchoolYear::Third));
        let years = weights.target_years();
        assert_eq!(years.clone().count(), 2);
        assert_eq!(years.last(), Some(SchoolYear::Third));
        assert_eq!(weights.sum(), 3.0);
        assert_eq!(weights.describe(), "中2×1・中3×2");
        assert_eq!(
            YearWeights::new(2.0, 2.0, 3.0).describe(),
            "中1×2・中2×2・中3×3"
        );
    }

    #[test]
    fn reverse_kind_tags() {
        assert_eq!(
            ReverseCalcKind::KanagawaTwoYearBlend.to_string(),
            "kanagawa-two-year-blend"
        );
        assert_eq!(
            "chiba-k-factor".parse::<ReverseCalcKind>(),
            Ok(ReverseCalcKind::ChibaKFactor)
        );
        assert_eq!("kyushu-okinawa".parse::<Region>(), Ok(Region::KyushuOkinawa));
    }
}
