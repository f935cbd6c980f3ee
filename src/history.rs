//! Saved calculation results, as exported by the front end, and their replay.

use chrono::{DateTime, FixedOffset};
use getset::{CopyGetters, Getters};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    prefecture::{self, DEFAULT_PREFECTURE},
    score::{composite, CompositeResult},
    subject::GradesRecord,
};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, TypedBuilder, Getters)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[getset(get = "pub")]
    #[builder(setter(into))]
    id: String,
    #[getset(get = "pub")]
    saved_at: DateTime<FixedOffset>,
    #[getset(get = "pub")]
    scores: GradesRecord,
    #[getset(get = "pub")]
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    memo: Option<String>,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefecture_code: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(
        default,
        rename = "use10PointScale",
        skip_serializing_if = "Option::is_none"
    )]
    use_ten_point_scale: Option<bool>,
}

impl HistoryEntry {
    /// Entries saved before prefectures were selectable belong to the default one.
    pub fn prefecture_code(&self) -> &str {
        self.prefecture_code.as_deref().unwrap_or(DEFAULT_PREFECTURE)
    }

    pub fn use_ten_point_scale(&self) -> bool {
        self.use_ten_point_scale.unwrap_or(false)
    }

    /// Recomputes the result with the current registry.
    pub fn replay(&self) -> CompositeResult {
        let code = self.prefecture_code();
        let ten = self.use_ten_point_scale();
        if ten && !prefecture::lookup(code).is_some_and(|rule| rule.supports_ten_point_scale()) {
            warn!(
                "Entry {:?} was saved on the ten-point scale but {code} does not support it; grades are clamped to 5",
                self.id
            );
        }
        composite(&self.scores, code, ten)
    }
}

#[derive(Clone, Debug, CopyGetters, Serialize)]
pub struct TrendPoint<'a> {
    #[getset(get_copy = "pub")]
    entry: &'a HistoryEntry,
    #[getset(get_copy = "pub")]
    result: CompositeResult,
    /// `None` for the first entry, or when the prefecture changed since the previous one.
    #[getset(get_copy = "pub")]
    total_delta: Option<i64>,
    #[getset(get_copy = "pub")]
    percent_delta: Option<i16>,
}

/// Replays every entry in chronological order with the change from the previous one.
pub fn trend(entries: &[HistoryEntry]) -> Vec<TrendPoint<'_>> {
    let mut ret = Vec::with_capacity(entries.len());
    let mut previous: Option<(&str, CompositeResult)> = None;
    for entry in entries.iter().sorted_by_key(|entry| entry.saved_at) {
        let result = entry.replay();
        let comparable = previous
            .filter(|(code, _)| *code == entry.prefecture_code())
            .map(|(_, result)| result);
        let percent_delta = previous.map(|(_, previous)| {
            i16::from(result.percent().get()) - i16::from(previous.percent().get())
        });
        ret.push(TrendPoint {
            entry,
            result,
            total_delta: comparable
                .map(|previous| i64::from(result.total()) - i64::from(previous.total())),
            percent_delta,
        });
        previous = Some((entry.prefecture_code(), result));
    }
    ret
}
