//! Forward calculation: grades to composite score, percentage and rank.
//!
//! Every function here is total. Out-of-range grades are clamped and an
//! unknown prefecture falls back to the plain sum of nine five-point grades,
//! because these run on every keystroke of a half-typed form.
//!
//! Only one set of nine grades is entered, even for prefectures counting
//! several school years. That set is taken as the grade of every target year,
//! so the per-year subtotal is scaled by the sum of the year weights. A
//! per-year input would be more faithful for e.g. Kanagawa, but this is the
//! behaviour the maxima in the registry are stated against.

use enum_map::EnumMap;
use getset::CopyGetters;
use log::debug;
use serde::Serialize;

use crate::{
    prefecture::{self, PrefectureRule},
    rank::{rank_of, Percent, RankTier},
    subject::{GradeScale, GradesRecord, Subject, SubjectGroup},
};

/// Maximum of the unweighted nine-subject sum used for unknown prefectures.
pub const FALLBACK_MAX_SCORE: u32 = 45;

#[derive(Clone, Copy, PartialEq, Eq, Debug, CopyGetters, Serialize)]
#[getset(get_copy = "pub")]
pub struct CompositeResult {
    total: u32,
    max: u32,
    percent: Percent,
    rank: RankTier,
}

fn weighted(rule: &PrefectureRule, group_sums: EnumMap<SubjectGroup, f64>) -> u32 {
    let per_year: f64 = group_sums
        .iter()
        .map(|(group, &sum)| sum * rule.multiplier(group))
        .sum();
    (rule.year_weights().sum() * per_year).round() as u32
}

pub fn max_score_of(rule: &PrefectureRule, use_ten_point_scale: bool) -> u32 {
    let ceiling = f64::from(rule.scale(use_ten_point_scale).ceiling());
    weighted(
        rule,
        EnumMap::from_fn(|group: SubjectGroup| ceiling * group.subject_count() as f64),
    )
}

pub fn total_score_of(
    grades: &GradesRecord,
    rule: &PrefectureRule,
    use_ten_point_scale: bool,
) -> u32 {
    let scale = rule.scale(use_ten_point_scale);
    let mut sums = EnumMap::<SubjectGroup, f64>::default();
    for (subject, grade) in grades.iter() {
        sums[subject.group()] += f64::from(scale.clamp(grade));
    }
    weighted(rule, sums)
}

pub fn max_score(code: &str, use_ten_point_scale: bool) -> u32 {
    match prefecture::lookup(code) {
        Some(rule) => max_score_of(rule, use_ten_point_scale),
        None => {
            debug!("Unknown prefecture {code:?}, using the unweighted maximum");
            FALLBACK_MAX_SCORE
        }
    }
}

pub fn total_score(grades: &GradesRecord, code: &str, use_ten_point_scale: bool) -> u32 {
    match prefecture::lookup(code) {
        Some(rule) => total_score_of(grades, rule, use_ten_point_scale),
        None => {
            debug!("Unknown prefecture {code:?}, using the unweighted sum");
            enum_iterator::all::<Subject>()
                .map(|subject| u32::from(GradeScale::FivePoint.clamp(grades[subject])))
                .sum()
        }
    }
}

/// `floor(total / max * 100)`, clamped to `0..=100`. Never rounded up.
pub fn percent(total: impl Into<f64>, max: impl Into<f64>) -> Percent {
    let (total, max) = (total.into(), max.into());
    if !(max > 0.0) || total.is_nan() {
        return Percent::MIN;
    }
    // Multiply first so that exact ratios such as 39/65 do not land just below 60.
    let ratio = (total * 100.0 / max).clamp(0.0, 100.0);
    Percent::new_saturating(ratio.floor() as u8)
}

pub fn rank(percent: Percent) -> RankTier {
    rank_of(percent)
}

pub fn composite(grades: &GradesRecord, code: &str, use_ten_point_scale: bool) -> CompositeResult {
    let total = total_score(grades, code, use_ten_point_scale);
    let max = max_score(code, use_ten_point_scale);
    let percent = percent(total, max);
    CompositeResult {
        total,
        max,
        percent,
        rank: rank(percent),
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use crate::{
        prefecture::list_all,
        rank::RankTier,
        subject::{GradesRecord, Subject},
    };

    use super::{composite, max_score, percent, total_score, FALLBACK_MAX_SCORE};

    #[test]
    fn max_matches_registry() {
        for rule in list_all() {
            let code = rule.code();
            assert_eq!(max_score(code, false), rule.max_composite_score(), "{code}");
            assert_eq!(
                total_score(&GradesRecord::uniform(5.0), code, false),
                rule.max_composite_score(),
                "{code}"
            );
            assert_eq!(
                total_score(&GradesRecord::uniform(10.0), code, true),
                max_score(code, true),
                "{code}"
            );
        }
    }

    #[test]
    fn min_is_strictly_inside() {
        for rule in list_all() {
            let code = rule.code();
            let min = total_score(&GradesRecord::uniform(1.0), code, false);
            assert!(0 < min && min < max_score(code, false), "{code}");
        }
    }

    #[test]
    fn ten_point_scale() {
        assert_eq!(max_score("kochi", false), 90);
        assert_eq!(max_score("kochi", true), 180);
        let grades = GradesRecord::uniform(8.0);
        assert_eq!(total_score(&grades, "kochi", true), 144);
        assert_eq!(total_score(&grades, "kochi", false), 90);
        // Requesting it elsewhere changes nothing.
        assert_eq!(max_score("tokyo", true), 65);
        assert_eq!(total_score(&grades, "tokyo", true), 65);
    }

    #[test]
    fn monotone_in_every_subject() {
        let mut rng = thread_rng();
        let rules = list_all().collect::<Vec<_>>();
        for _ in 0..2_000 {
            let rule = rules[rng.gen_range(0..rules.len())];
            let ten = rule.supports_ten_point_scale() && rng.gen_bool(0.5);
            let ceiling = if ten { 10 } else { 5 };
            let mut grades = GradesRecord::uniform(1.0);
            for subject in enum_iterator::all::<Subject>() {
                grades.set(subject, f64::from(rng.gen_range(1..=ceiling)));
            }
            for subject in enum_iterator::all::<Subject>() {
                if grades[subject] < f64::from(ceiling) {
                    let raised = grades.with(subject, grades[subject] + 1.0);
                    assert!(
                        total_score(&raised, rule.code(), ten)
                            >= total_score(&grades, rule.code(), ten),
                        "{} {subject:?} {grades}",
                        rule.code()
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_range_grades_are_clamped() {
        for rule in list_all() {
            let code = rule.code();
            let base = GradesRecord::uniform(3.0);
            for subject in enum_iterator::all::<Subject>() {
                for (raw, clamped) in [(0.0, 1.0), (-5.0, 1.0), (999.0, 5.0), (4.6, 5.0)] {
                    assert_eq!(
                        total_score(&base.with(subject, raw), code, false),
                        total_score(&base.with(subject, clamped), code, false),
                        "{code} {subject:?} {raw}"
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_prefecture_falls_back() {
        let grades = GradesRecord::uniform(3.0).with(Subject::Music, 12.0);
        assert_eq!(max_score("atlantis", false), FALLBACK_MAX_SCORE);
        assert_eq!(total_score(&grades, "atlantis", true), 8 * 3 + 5);
    }

    #[test]
    fn percent_is_floored() {
        assert_eq!(percent(59, 65).get(), 90);
        assert_eq!(percent(39, 65).get(), 60);
        assert_eq!(percent(64, 65).get(), 98);
        assert_eq!(percent(65, 65).get(), 100);
        assert_eq!(percent(70, 65).get(), 100);
        assert_eq!(percent(-3, 65).get(), 0);
        assert_eq!(percent(10, 0).get(), 0);
        assert_eq!(percent(10, -4).get(), 0);
        for max in 1..=500u32 {
            for total in 0..=max {
                let expected = (u64::from(total) * 100 / u64::from(max)) as u8;
                assert_eq!(percent(total, max).get(), expected, "{total}/{max}");
            }
        }
    }

    #[test]
    fn tokyo_scenarios() {
        let top = composite(&GradesRecord::uniform(5.0), "tokyo", false);
        assert_eq!((top.total(), top.max()), (65, 65));
        assert_eq!(top.rank(), RankTier::S);

        let middle = composite(&GradesRecord::uniform(3.0), "tokyo", false);
        assert_eq!(middle.total(), 39);
        assert_eq!(middle.percent().get(), 60);
        assert_eq!(middle.rank(), RankTier::B);
    }

    #[test]
    fn osaka_single_entry_convention() {
        // One grade set counted for all three years with weights 1:1:3.
        let result = composite(&GradesRecord::uniform(3.0), "osaka", false);
        assert_eq!(result.total(), 135);
        assert_eq!(result.max(), 225);
        assert_eq!(result.percent().get(), 60);
    }

    #[test]
    fn fractional_multipliers() {
        // 5 * 4 * 4 + 4 * 4 * 7.5 = 200
        let grades = GradesRecord::uniform(4.0);
        assert_eq!(total_score(&grades, "hyogo", false), 200);
        let grades = GradesRecord::uniform(3.0).with(Subject::Music, 4.0);
        // (15 + 13 * 1.25) * 3 = 93.75
        assert_eq!(total_score(&grades, "ishikawa", false), 94);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let grades: GradesRecord = "5,4,3,4,5,2,3,4,5".parse().unwrap();
        for rule in list_all() {
            let first = composite(&grades, rule.code(), true);
            assert_eq!(first, composite(&grades, rule.code(), true));
        }
    }
}
