//! Reverse calculation: the exam score needed to reach a target composite.
//!
//! Unlike the forward side, inputs here are validated rather than clamped;
//! a silently corrected configuration would yield a misleading requirement.

use std::ops::RangeInclusive;

use derive_more::{From, Into};
use enum_iterator::Sequence;
use getset::{CopyGetters, Getters};
use log::debug;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::{
    prefecture::{self, PrefectureRule, ReverseCalcKind, UnknownPrefecture, YearWeights},
    rank::Percent,
    score::max_score_of,
};

/// Tokyo's 65-point internal score expressed on a 300-point basis.
pub const TOKYO_INTERNAL_BASIS: f64 = 300.0 / 65.0;
/// Speaking test points carved out of Tokyo's exam total.
pub const TOKYO_SPEAKING_TEST_MAX: f64 = 20.0;
/// Share of the entered year assumed for Kanagawa's unobserved year.
pub const KANAGAWA_ESTIMATE_RATIO: f64 = 0.8;
pub const KANAGAWA_ACADEMIC_WEIGHT: f64 = 0.8;
pub const K_FACTOR_RANGE: RangeInclusive<f64> = 0.5..=2.0;
const EXAM_SUBJECT_COUNT: f64 = 5.0;

/// Osaka's selection types, from I (exam-heavy) to V (internal-heavy).
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Default,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
    Sequence,
)]
pub enum OsakaType {
    I,
    #[default]
    II,
    III,
    IV,
    V,
}
impl OsakaType {
    pub fn internal_multiplier(self) -> f64 {
        use OsakaType::*;
        match self {
            I => 0.6,
            II => 0.8,
            III => 1.0,
            IV => 1.2,
            V => 1.4,
        }
    }
}

/// Chiba's per-school multiplier on the internal score.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, From, Into, Serialize, Deserialize)]
pub struct KFactor(f64);
impl KFactor {
    pub fn get(self) -> f64 {
        self.0
    }
}
impl Default for KFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

/// A reverse-calculation profile together with the parameters it needs.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReverseProfile {
    GenericRatio,
    OsakaTyped { osaka_type: OsakaType },
    TokyoSpeakingTest,
    KanagawaTwoYearBlend,
    ChibaKFactor { k: KFactor },
    SaitamaRatio,
}
impl ReverseProfile {
    pub fn kind(self) -> ReverseCalcKind {
        use ReverseProfile::*;
        match self {
            GenericRatio => ReverseCalcKind::GenericRatio,
            OsakaTyped { .. } => ReverseCalcKind::OsakaTyped,
            TokyoSpeakingTest => ReverseCalcKind::TokyoSpeakingTest,
            KanagawaTwoYearBlend => ReverseCalcKind::KanagawaTwoYearBlend,
            ChibaKFactor { .. } => ReverseCalcKind::ChibaKFactor,
            SaitamaRatio => ReverseCalcKind::SaitamaRatio,
        }
    }

    /// Exam points available to the written test.
    pub fn effective_exam_max(self, exam_max_score: f64) -> f64 {
        match self {
            ReverseProfile::TokyoSpeakingTest => exam_max_score - TOKYO_SPEAKING_TEST_MAX,
            _ => exam_max_score,
        }
    }
}
impl From<ReverseCalcKind> for ReverseProfile {
    fn from(kind: ReverseCalcKind) -> Self {
        use ReverseCalcKind::*;
        match kind {
            GenericRatio => Self::GenericRatio,
            OsakaTyped => Self::OsakaTyped {
                osaka_type: Default::default(),
            },
            TokyoSpeakingTest => Self::TokyoSpeakingTest,
            KanagawaTwoYearBlend => Self::KanagawaTwoYearBlend,
            ChibaKFactor => Self::ChibaKFactor {
                k: Default::default(),
            },
            SaitamaRatio => Self::SaitamaRatio,
        }
    }
}

#[derive(Clone, Debug, TypedBuilder, Serialize, Deserialize)]
pub struct ReverseQuery {
    #[builder(setter(into))]
    pub prefecture_code: String,
    pub target_composite: f64,
    pub current_internal_score: f64,
    pub internal_score_max: f64,
    pub internal_ratio_percent: f64,
    pub exam_max_score: f64,
    /// Overrides the prefecture's registered profile.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub profile: Option<ReverseProfile>,
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum ReverseValidationError {
    #[error(transparent)]
    UnknownPrefecture(#[from] UnknownPrefecture),
    #[error("Current internal score {value} is outside [0, {max}]")]
    InternalScoreOutOfRange { value: f64, max: f64 },
    #[error("Internal score maximum {value} exceeds the single-year subtotal {limit}")]
    InternalMaxTooLarge { value: f64, limit: f64 },
    #[error("Internal score ratio {0}% is outside [0, 100]")]
    RatioOutOfRange(f64),
    #[error("Exam maximum {0} leaves less than one point for the written exam")]
    ExamMaxTooSmall(f64),
    #[error("Target composite score {0} must be a non-negative number")]
    InvalidTarget(f64),
    #[error("K factor {0} is outside [0.5, 2.0]")]
    KFactorOutOfRange(f64),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ReverseVerdict {
    /// The internal score alone reaches the target.
    AlreadySecured,
    VeryHighScoreNeeded,
    /// Reachable, but raising the internal score would help noticeably.
    Recoverable,
    Achievable,
}
impl ReverseVerdict {
    fn classify(unclamped: f64, percent: Percent) -> Self {
        match percent.get() {
            _ if unclamped <= 0.0 => Self::AlreadySecured,
            90.. => Self::VeryHighScoreNeeded,
            70.. => Self::Recoverable,
            _ => Self::Achievable,
        }
    }

    pub fn message(self) -> &'static str {
        use ReverseVerdict::*;
        match self {
            AlreadySecured => "内申点だけで目標に届いています。当日点が0点でも目標を満たせます。",
            VeryHighScoreNeeded => "かなりの高得点が必要です。",
            Recoverable => "当日点で挽回できますが、内申点を上げるとぐっと楽になります。",
            Achievable => "十分に達成できる目標です。",
        }
    }
}

#[derive(Clone, PartialEq, Debug, CopyGetters, Getters, Serialize)]
pub struct ReverseResult {
    #[getset(get_copy = "pub")]
    profile: ReverseProfile,
    /// Clamped to `0..=exam_max_score`.
    #[getset(get_copy = "pub")]
    required_exam_score: u32,
    /// Rounded requirement before clamping; may be negative or infinite.
    #[getset(get_copy = "pub")]
    unclamped_required_exam_score: f64,
    /// Points of the written exam, i.e. without any carved-out component.
    #[getset(get_copy = "pub")]
    exam_max_score: f64,
    #[getset(get_copy = "pub")]
    exam_score_percent: Percent,
    #[getset(get_copy = "pub")]
    per_subject_average: u32,
    /// The unclamped requirement lies within `0..=exam_max_score`.
    #[getset(get_copy = "pub")]
    is_achievable: bool,
    #[getset(get_copy = "pub")]
    verdict: ReverseVerdict,
    #[getset(get = "pub")]
    explanation: String,
}

fn validate(
    q: &ReverseQuery,
    rule: &PrefectureRule,
    profile: ReverseProfile,
) -> Result<(), ReverseValidationError> {
    use ReverseValidationError::*;
    if !(q.target_composite.is_finite() && q.target_composite >= 0.0) {
        return Err(InvalidTarget(q.target_composite));
    }
    if !(0.0..=q.internal_score_max).contains(&q.current_internal_score) {
        return Err(InternalScoreOutOfRange {
            value: q.current_internal_score,
            max: q.internal_score_max,
        });
    }
    if let ReverseProfile::KanagawaTwoYearBlend = profile {
        let limit = internal_score_max_of(rule, profile, true);
        if q.internal_score_max > limit {
            return Err(InternalMaxTooLarge {
                value: q.internal_score_max,
                limit,
            });
        }
    }
    if !(0.0..=100.0).contains(&q.internal_ratio_percent) {
        return Err(RatioOutOfRange(q.internal_ratio_percent));
    }
    if !(q.exam_max_score.is_finite() && profile.effective_exam_max(q.exam_max_score) >= 1.0) {
        return Err(ExamMaxTooSmall(q.exam_max_score));
    }
    if let ReverseProfile::ChibaKFactor { k } = profile {
        if !K_FACTOR_RANGE.contains(&k.get()) {
            return Err(KFactorOutOfRange(k.get()));
        }
    }
    Ok(())
}

/// Scale of the internal score a profile takes as input.
///
/// Kanagawa takes one year's subtotal, which it weights itself; every other
/// profile takes the composite computed by the forward engine.
pub fn internal_score_max_of(
    rule: &PrefectureRule,
    profile: ReverseProfile,
    use_ten_point_scale: bool,
) -> f64 {
    let composite = f64::from(max_score_of(rule, use_ten_point_scale));
    match profile {
        ReverseProfile::KanagawaTwoYearBlend => composite / rule.year_weights().sum(),
        _ => composite,
    }
}

/// `(target - internal * r) / (1 - r)` with `r` in percent.
///
/// With `r = 100` the exam carries no weight, so the answer is either
/// nothing at all or unreachable.
pub fn ratio_blend(target: f64, internal: f64, ratio_percent: f64) -> f64 {
    let internal_part = internal * ratio_percent / 100.0;
    let exam_share = 100.0 - ratio_percent;
    if exam_share <= 0.0 {
        return if internal_part >= target {
            0.0
        } else {
            f64::INFINITY
        };
    }
    (target - internal_part) * 100.0 / exam_share
}

/// Internal contribution when only the latest target year was entered.
/// Earlier target years are estimated from it.
pub fn kanagawa_contribution(weights: YearWeights, entered: f64) -> f64 {
    let latest = weights.latest_target_year();
    let blended: f64 = weights
        .target_years()
        .map(|year| {
            let score = if Some(year) == latest {
                entered
            } else {
                entered * KANAGAWA_ESTIMATE_RATIO
            };
            weights.get(year) * score
        })
        .sum();
    blended * KANAGAWA_ACADEMIC_WEIGHT
}

fn unclamped_requirement(
    query: &ReverseQuery,
    rule: &PrefectureRule,
    profile: ReverseProfile,
) -> f64 {
    use ReverseProfile::*;
    let target = query.target_composite;
    let internal = query.current_internal_score;
    match profile {
        GenericRatio | SaitamaRatio => ratio_blend(target, internal, query.internal_ratio_percent),
        OsakaTyped { osaka_type } => target - internal * osaka_type.internal_multiplier(),
        TokyoSpeakingTest => ratio_blend(
            target,
            internal * TOKYO_INTERNAL_BASIS,
            query.internal_ratio_percent,
        ),
        KanagawaTwoYearBlend => target - kanagawa_contribution(rule.year_weights(), internal),
        ChibaKFactor { k } => target - internal * k.get(),
    }
}

fn explain(
    required: u32,
    exam_max: f64,
    percent: Percent,
    per_subject_average: u32,
    verdict: ReverseVerdict,
    out_of_reach: bool,
) -> String {
    let mut text = format!(
        "必要な当日点: {required} / {exam_max} ({percent}%)。5教科平均で1教科あたり{per_subject_average}点。{}",
        verdict.message()
    );
    if out_of_reach {
        text.push_str("満点を取っても目標には届きません。");
    }
    text
}

fn conclude(profile: ReverseProfile, unclamped: f64, exam_max: f64) -> ReverseResult {
    let required = unclamped.clamp(0.0, exam_max);
    let percent =
        Percent::new_saturating((required * 100.0 / exam_max).round().clamp(0.0, 100.0) as u8);
    let per_subject_average = (required / EXAM_SUBJECT_COUNT).round() as u32;
    let is_achievable = (0.0..=exam_max).contains(&unclamped);
    let verdict = ReverseVerdict::classify(unclamped, percent);
    let required_exam_score = required.round() as u32;
    ReverseResult {
        profile,
        required_exam_score,
        unclamped_required_exam_score: unclamped,
        exam_max_score: exam_max,
        exam_score_percent: percent,
        per_subject_average,
        is_achievable,
        verdict,
        explanation: explain(
            required_exam_score,
            exam_max,
            percent,
            per_subject_average,
            verdict,
            unclamped > exam_max,
        ),
    }
}

/// Computes the exam score needed for `query`, using the prefecture's
/// registered profile unless the query names one.
pub fn required_exam_score(query: &ReverseQuery) -> Result<ReverseResult, ReverseValidationError> {
    let rule = prefecture::get(&query.prefecture_code)?;
    let profile = query
        .profile
        .unwrap_or_else(|| rule.reverse_calc().into());
    validate(query, rule, profile)?;
    let unclamped = unclamped_requirement(query, rule, profile).round();
    debug!(
        "{} via {}: unclamped requirement {unclamped}",
        rule.code(),
        profile.kind()
    );
    Ok(conclude(
        profile,
        unclamped,
        profile.effective_exam_max(query.exam_max_score),
    ))
}
