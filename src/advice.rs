//! Pitfalls, FAQ entries and advice generated from the registry numbers.

use getset::Getters;
use serde::Serialize;

use crate::{
    prefecture::{PrefectureRule, ReverseCalcKind, SchoolYear},
    rank::RankTier,
    score::{max_score_of, CompositeResult},
    subject::SubjectGroup,
};

/// Points gained by raising one subject of `group` by one grade.
pub fn grade_point_value(rule: &PrefectureRule, group: SubjectGroup) -> f64 {
    rule.year_weights().sum() * rule.multiplier(group)
}

/// The group where one more grade point is worth the most.
pub fn best_lever(rule: &PrefectureRule) -> SubjectGroup {
    let core = grade_point_value(rule, SubjectGroup::Core);
    let practical = grade_point_value(rule, SubjectGroup::Practical);
    if practical >= core {
        SubjectGroup::Practical
    } else {
        SubjectGroup::Core
    }
}

pub fn pitfalls(rule: &PrefectureRule) -> Vec<String> {
    let weights = rule.year_weights();
    let (core, practical) = (rule.core_multiplier(), rule.practical_multiplier());
    let mut ret = vec![];

    if practical > core {
        ret.push(format!(
            "実技4教科は主要5教科の{}倍の重みで計算されます。実技を軽視すると大きく失点します。",
            practical / core
        ));
    } else if practical < core {
        ret.push(format!(
            "主要5教科は実技4教科の{}倍の重みで計算されます。",
            core / practical
        ));
    }

    let years = weights.target_years().collect::<Vec<_>>();
    match years.as_slice() {
        [SchoolYear::Third] => {
            ret.push("対象は中3の成績だけです。中3の1年間で内申点が決まります。".to_owned())
        }
        [SchoolYear::First, ..] => ret.push(
            "中1の成績から内申点に含まれます。早い時期の定期テストも手を抜けません。".to_owned(),
        ),
        _ => {}
    }
    let third = weights.get(SchoolYear::Third);
    let third_is_heaviest = years.iter().all(|&year| weights.get(year) <= third);
    if years.len() > 1 && third_is_heaviest && third > weights.get(years[0]) {
        ret.push(format!("中3の成績は{third}倍で計算され、最も比重が大きくなります。"));
    }

    if rule.supports_ten_point_scale() {
        ret.push(format!(
            "中3の評定は10段階でも入力できます。10段階の場合の満点は{}点です。",
            max_score_of(rule, true)
        ));
    }
    if let Some(note) = rule.note() {
        ret.push(note.to_owned());
    }
    ret
}

#[derive(Clone, PartialEq, Eq, Debug, Getters, Serialize)]
#[getset(get = "pub")]
pub struct Faq {
    question: String,
    answer: String,
}
impl Faq {
    fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

fn reverse_calc_description(kind: ReverseCalcKind) -> &'static str {
    use ReverseCalcKind::*;
    match kind {
        GenericRatio | SaitamaRatio => {
            "内申点と当日点を学校ごとの比率で合算した値から、必要な当日点を逆算します。"
        }
        OsakaTyped => "タイプI〜Vごとに決まった倍率を内申点に掛け、残りを当日点で補う形で逆算します。",
        TokyoSpeakingTest => {
            "換算内申を300点満点に換算して比率を掛け、スピーキングテスト20点を除いた学力検査の点数を逆算します。"
        }
        KanagawaTwoYearBlend => {
            "入力した中3の評定から中2の評定を8割と見積もり、学年比重を掛けて合算してから逆算します。"
        }
        ChibaKFactor => "学校ごとのK値を調査書点に掛け、残りを当日点で補う形で逆算します。",
    }
}

pub fn faq(rule: &PrefectureRule) -> Vec<Faq> {
    let name = rule.name();
    let years = rule.year_weights().describe();
    let core = grade_point_value(rule, SubjectGroup::Core);
    let practical = grade_point_value(rule, SubjectGroup::Practical);
    vec![
        Faq::new(
            format!("{name}の内申点は何点満点ですか？"),
            format!(
                "{}点満点です（{years}、主要5教科×{}・実技4教科×{}）。",
                rule.max_composite_score(),
                rule.core_multiplier(),
                rule.practical_multiplier()
            ),
        ),
        Faq::new(
            "どの学年の成績が対象ですか？",
            format!("{years}で計算します。"),
        ),
        Faq::new(
            "評定を1上げると内申点は何点上がりますか？",
            format!("実技教科なら{practical}点、主要教科なら{core}点上がります。"),
        ),
        Faq::new(
            "必要な当日点はどう計算しますか？",
            reverse_calc_description(rule.reverse_calc()),
        ),
    ]
}

pub fn advice(rule: &PrefectureRule, result: &CompositeResult) -> String {
    let lever = best_lever(rule);
    let head = match result.rank() {
        RankTier::S => "トップ校を狙える位置です。今の評定を維持しましょう。",
        RankTier::A => "上位校が視野に入っています。あと一歩の上積みを。",
        RankTier::B => "中堅校圏内です。伸ばしやすい教科から評定を上げましょう。",
        RankTier::C => "まずは基礎固めから。提出物と授業態度の見直しが近道です。",
    };
    format!(
        "{}（{}%、{}）。{head}{}の評定を1上げると{}点伸びます。",
        result.rank().title(),
        result.percent(),
        rule.name(),
        lever.name_ja(),
        grade_point_value(rule, lever)
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        prefecture::{list_all, lookup},
        score::{composite, max_score_of},
        subject::{GradesRecord, SubjectGroup},
    };

    use super::{advice, best_lever, faq, grade_point_value, pitfalls};

    #[test]
    fn grade_point_values_add_up_to_max() {
        for rule in list_all() {
            let sum = 5.0
                * (5.0 * grade_point_value(rule, SubjectGroup::Core)
                    + 4.0 * grade_point_value(rule, SubjectGroup::Practical));
            assert_eq!(sum.round() as u32, rule.max_composite_score(), "{}", rule.code());
        }
    }

    #[test]
    fn tokyo_texts() {
        let tokyo = lookup("tokyo").unwrap();
        assert_eq!(grade_point_value(tokyo, SubjectGroup::Practical), 2.0);
        assert_eq!(best_lever(tokyo), SubjectGroup::Practical);

        let pitfalls = pitfalls(tokyo);
        assert!(pitfalls[0].contains("2倍"));
        assert!(pitfalls.iter().any(|p| p.contains("中3の成績だけ")));

        let faq = faq(tokyo);
        assert_eq!(faq[0].question(), "東京都の内申点は何点満点ですか？");
        assert!(faq[0].answer().starts_with("65点満点"));
        assert!(faq[1].answer().contains("中3×1"));
        assert!(faq[3].answer().contains("スピーキング"));
    }

    #[test]
    fn extremes() {
        let okayama = lookup("okayama").unwrap();
        assert!(pitfalls(okayama)[0].contains("10倍"));
        let hokkaido = pitfalls(lookup("hokkaido").unwrap());
        assert!(hokkaido.iter().any(|p| p.contains("中1の成績から")));
        assert!(hokkaido.iter().any(|p| p.contains("中3の成績は3倍")));
        let kumamoto = pitfalls(lookup("kumamoto").unwrap());
        assert!(kumamoto.iter().all(|p| !p.contains("倍の重み")));
    }

    #[test]
    fn ten_point_and_notes() {
        let kochi = lookup("kochi").unwrap();
        let expected = format!("{}点です", max_score_of(kochi, true));
        assert!(pitfalls(kochi).iter().any(|p| p.contains(&expected)));
        let ishikawa = lookup("ishikawa").unwrap();
        assert!(pitfalls(ishikawa).iter().any(|p| p.contains("150点")));
    }

    #[test]
    fn advice_mentions_rank_and_lever() {
        let osaka = lookup("osaka").unwrap();
        let result = composite(&GradesRecord::uniform(3.0), "osaka", false);
        let text = advice(osaka, &result);
        assert!(text.starts_with("中堅校圏内（60%、大阪府）"));
        assert!(text.contains("実技4教科の評定を1上げると5点"));

        let hyogo = lookup("hyogo").unwrap();
        assert!(advice(hyogo, &composite(&GradesRecord::uniform(5.0), "hyogo", false))
            .contains("実技4教科の評定を1上げると7.5点"));
    }
}
