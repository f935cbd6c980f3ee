use chrono::NaiveDate;

use super::{PrefectureRule, Region::*, ReverseCalcKind, YearWeights};

pub(super) fn last_verified() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
}

/// Every prefecture, in JIS code order.
///
/// `max_composite_score` is written out by hand and must agree with the
/// formula evaluated on all-5 grades; the tests in `score` check this.
pub(super) fn rules() -> Vec<PrefectureRule> {
    vec![
        PrefectureRule::builder()
            .code("hokkaido")
            .name("北海道")
            .region(Hokkaido)
            .year_weights(YearWeights::new(2.0, 2.0, 3.0))
            .max_composite_score(315)
            .description("中1・中2の成績を2倍、中3の成績を3倍して合計する学習点方式。")
            .source_url("https://www.pref.hokkaido.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("aomori")
            .name("青森県")
            .region(Tohoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの9教科の評定を同じ比重で合計する。")
            .source_url("https://www.pref.aomori.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("iwate")
            .name("岩手県")
            .region(Tohoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.iwate.jp/")
            .build(),
        PrefectureRule::builder()
            .code("miyagi")
            .name("宮城県")
            .region(Tohoku)
            .year_weights(YearWeights::new(1.0, 1.0, 2.0))
            .practical_multiplier(2.0)
            .max_composite_score(260)
            .description("中3の成績を2倍、実技4教科を2倍にして合計する。")
            .source_url("https://www.pref.miyagi.jp/")
            .build(),
        PrefectureRule::builder()
            .code("akita")
            .name("秋田県")
            .region(Tohoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.akita.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("yamagata")
            .name("山形県")
            .region(Tohoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.yamagata.jp/")
            .build(),
        PrefectureRule::builder()
            .code("fukushima")
            .name("福島県")
            .region(Tohoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .practical_multiplier(2.0)
            .max_composite_score(195)
            .description("中1から中3までの評定を合計し、実技4教科は2倍で計算する。")
            .source_url("https://www.pref.fukushima.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("ibaraki")
            .name("茨城県")
            .region(Kanto)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.ibaraki.jp/")
            .build(),
        PrefectureRule::builder()
            .code("tochigi")
            .name("栃木県")
            .region(Kanto)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.tochigi.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("gunma")
            .name("群馬県")
            .region(Kanto)
            .year_weights(YearWeights::new(1.0, 1.0, 2.0))
            .max_composite_score(180)
            .description("中1・中2は等倍、中3は2倍で合計する。")
            .source_url("https://www.pref.gunma.jp/")
            .build(),
        PrefectureRule::builder()
            .code("saitama")
            .name("埼玉県")
            .region(Kanto)
            .year_weights(YearWeights::new(1.0, 1.0, 2.0))
            .max_composite_score(180)
            .reverse_calc(ReverseCalcKind::SaitamaRatio)
            .description("学年比率1:1:2が一般的。学力検査との比率は学校ごとに定められる。")
            .source_url("https://www.pref.saitama.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("chiba")
            .name("千葉県")
            .region(Kanto)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .reverse_calc(ReverseCalcKind::ChibaKFactor)
            .description("中1から中3までの評定を合計し、学校ごとのK値を掛けて調査書点とする。")
            .source_url("https://www.pref.chiba.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("tokyo")
            .name("東京都")
            .region(Kanto)
            .year_weights(YearWeights::new(0.0, 0.0, 1.0))
            .practical_multiplier(2.0)
            .max_composite_score(65)
            .reverse_calc(ReverseCalcKind::TokyoSpeakingTest)
            .description("中3の評定のみを使い、実技4教科を2倍にする換算内申。")
            .source_url("https://www.metro.tokyo.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("kanagawa")
            .name("神奈川県")
            .region(Kanto)
            .year_weights(YearWeights::new(0.0, 1.0, 2.0))
            .max_composite_score(135)
            .reverse_calc(ReverseCalcKind::KanagawaTwoYearBlend)
            .description("中2の評定と、2倍にした中3の評定を合計する。")
            .source_url("https://www.pref.kanagawa.jp/")
            .build(),
        PrefectureRule::builder()
            .code("niigata")
            .name("新潟県")
            .region(Chubu)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .practical_multiplier(2.0)
            .max_composite_score(195)
            .description("中1から中3までの評定を合計し、実技4教科は2倍で計算する。")
            .source_url("https://www.pref.niigata.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("toyama")
            .name("富山県")
            .region(Chubu)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.toyama.jp/")
            .build(),
        PrefectureRule::builder()
            .code("ishikawa")
            .name("石川県")
            .region(Chubu)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .practical_multiplier(1.25)
            .max_composite_score(150)
            .description("中1から中3までの評定を合計し、実技4教科には1.25倍の加点がある。")
            .note("実技4教科の加点により満点は135点ではなく150点になる。")
            .source_url("https://www.pref.ishikawa.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("fukui")
            .name("福井県")
            .region(Chubu)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.fukui.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("yamanashi")
            .name("山梨県")
            .region(Chubu)
            .year_weights(YearWeights::new(1.0, 1.0, 2.0))
            .max_composite_score(180)
            .description("中1・中2は等倍、中3は2倍で合計する。")
            .source_url("https://www.pref.yamanashi.jp/")
            .build(),
        PrefectureRule::builder()
            .code("nagano")
            .name("長野県")
            .region(Chubu)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.nagano.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("gifu")
            .name("岐阜県")
            .region(Chubu)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.gifu.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("shizuoka")
            .name("静岡県")
            .region(Chubu)
            .year_weights(YearWeights::new(0.0, 1.0, 1.0))
            .max_composite_score(90)
            .description("中2と中3の評定を等倍で合計する。")
            .source_url("https://www.pref.shizuoka.jp/")
            .build(),
        PrefectureRule::builder()
            .code("aichi")
            .name("愛知県")
            .region(Chubu)
            .year_weights(YearWeights::new(0.0, 0.0, 2.0))
            .max_composite_score(90)
            .description("中3の評定合計を2倍にする。")
            .source_url("https://www.pref.aichi.jp/")
            .build(),
        PrefectureRule::builder()
            .code("mie")
            .name("三重県")
            .region(Kinki)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.mie.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("shiga")
            .name("滋賀県")
            .region(Kinki)
            .year_weights(YearWeights::new(1.0, 1.0, 2.0))
            .max_composite_score(180)
            .description("中1・中2は等倍、中3は2倍で合計する。")
            .source_url("https://www.pref.shiga.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("kyoto")
            .name("京都府")
            .region(Kinki)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .practical_multiplier(2.0)
            .max_composite_score(195)
            .description("中1から中3までの評定を合計し、実技4教科は2倍で計算する。")
            .source_url("https://www.pref.kyoto.jp/")
            .build(),
        PrefectureRule::builder()
            .code("osaka")
            .name("大阪府")
            .region(Kinki)
            .year_weights(YearWeights::new(1.0, 1.0, 3.0))
            .max_composite_score(225)
            .reverse_calc(ReverseCalcKind::OsakaTyped)
            .description("中1・中2は等倍、中3は3倍で合計する。タイプI〜Vで内申点の倍率が変わる。")
            .source_url("https://www.pref.osaka.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("hyogo")
            .name("兵庫県")
            .region(Kinki)
            .year_weights(YearWeights::new(0.0, 0.0, 1.0))
            .core_multiplier(4.0)
            .practical_multiplier(7.5)
            .max_composite_score(250)
            .description("中3の評定のみを使い、主要5教科を4倍、実技4教科を7.5倍にする。")
            .source_url("https://web.pref.hyogo.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("nara")
            .name("奈良県")
            .region(Kinki)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.nara.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("wakayama")
            .name("和歌山県")
            .region(Kinki)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.wakayama.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("tottori")
            .name("鳥取県")
            .region(Chugoku)
            .year_weights(YearWeights::new(1.0, 1.0, 2.0))
            .practical_multiplier(2.0)
            .max_composite_score(260)
            .description("中3の成績を2倍、実技4教科を2倍にして合計する。")
            .source_url("https://www.pref.tottori.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("shimane")
            .name("島根県")
            .region(Chugoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.shimane.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("okayama")
            .name("岡山県")
            .region(Chugoku)
            .year_weights(YearWeights::new(0.0, 0.0, 1.0))
            .core_multiplier(2.0)
            .practical_multiplier(20.0)
            .max_composite_score(450)
            .description("中3の評定のみを使い、主要5教科を2倍、実技4教科を20倍にする。")
            .source_url("https://www.pref.okayama.jp/")
            .build(),
        PrefectureRule::builder()
            .code("hiroshima")
            .name("広島県")
            .region(Chugoku)
            .year_weights(YearWeights::new(1.0, 1.0, 3.0))
            .practical_multiplier(2.0)
            .max_composite_score(325)
            .description("中3の成績を3倍、実技4教科を2倍にして合計する。")
            .source_url("https://www.pref.hiroshima.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("yamaguchi")
            .name("山口県")
            .region(Chugoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.yamaguchi.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("tokushima")
            .name("徳島県")
            .region(Shikoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .practical_multiplier(2.0)
            .max_composite_score(195)
            .description("中1から中3までの評定を合計し、実技4教科は2倍で計算する。")
            .source_url("https://www.pref.tokushima.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("kagawa")
            .name("香川県")
            .region(Shikoku)
            .year_weights(YearWeights::new(0.0, 0.0, 1.0))
            .core_multiplier(2.0)
            .practical_multiplier(4.0)
            .max_composite_score(130)
            .description("中3の評定のみを使い、主要5教科を2倍、実技4教科を4倍にする。")
            .source_url("https://www.pref.kagawa.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("ehime")
            .name("愛媛県")
            .region(Shikoku)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.ehime.jp/")
            .build(),
        PrefectureRule::builder()
            .code("kochi")
            .name("高知県")
            .region(Shikoku)
            .year_weights(YearWeights::new(0.0, 0.0, 2.0))
            .max_composite_score(90)
            .supports_ten_point_scale(true)
            .description("中3の評定合計を2倍にする。中3の評定は10段階でも入力できる。")
            .note("10段階評定を使う場合の満点は180点。")
            .source_url("https://www.pref.kochi.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("fukuoka")
            .name("福岡県")
            .region(KyushuOkinawa)
            .year_weights(YearWeights::new(0.0, 0.0, 1.0))
            .max_composite_score(45)
            .description("中3の9教科の評定をそのまま合計する。")
            .source_url("https://www.pref.fukuoka.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("saga")
            .name("佐賀県")
            .region(KyushuOkinawa)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .practical_multiplier(2.0)
            .max_composite_score(195)
            .description("中1から中3までの評定を合計し、実技4教科は2倍で計算する。")
            .source_url("https://www.pref.saga.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("nagasaki")
            .name("長崎県")
            .region(KyushuOkinawa)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.nagasaki.jp/")
            .build(),
        PrefectureRule::builder()
            .code("kumamoto")
            .name("熊本県")
            .region(KyushuOkinawa)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .core_multiplier(2.0)
            .practical_multiplier(2.0)
            .max_composite_score(270)
            .description("中1から中3までの評定を合計し、全教科を2倍にする。")
            .source_url("https://www.pref.kumamoto.jp/")
            .build(),
        PrefectureRule::builder()
            .code("oita")
            .name("大分県")
            .region(KyushuOkinawa)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.oita.jp/")
            .build(),
        PrefectureRule::builder()
            .code("miyazaki")
            .name("宮崎県")
            .region(KyushuOkinawa)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .practical_multiplier(1.5)
            .max_composite_score(165)
            .description("中1から中3までの評定を合計し、実技4教科には1.5倍の加点がある。")
            .note("実技4教科の加点により満点は135点ではなく165点になる。")
            .source_url("https://www.pref.miyazaki.lg.jp/")
            .build(),
        PrefectureRule::builder()
            .code("kagoshima")
            .name("鹿児島県")
            .region(KyushuOkinawa)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.kagoshima.jp/")
            .build(),
        PrefectureRule::builder()
            .code("okinawa")
            .name("沖縄県")
            .region(KyushuOkinawa)
            .year_weights(YearWeights::new(1.0, 1.0, 1.0))
            .max_composite_score(135)
            .description("中1から中3までの評定を等倍で合計する。")
            .source_url("https://www.pref.okinawa.lg.jp/")
            .build(),
    ]
}
