use std::ops::RangeInclusive;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Integer percentage in `0..=100`.
pub type Percent = deranged::RangedU8<0, 100>;

/// Rank tiers, best first.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, strum::Display, Serialize, Deserialize, Sequence,
)]
pub enum RankTier {
    S,
    A,
    B,
    C,
}

impl RankTier {
    pub fn min_percent(self) -> u8 {
        use RankTier::*;
        match self {
            S => 85,
            A => 70,
            B => 55,
            C => 0,
        }
    }

    pub fn max_percent(self) -> u8 {
        use RankTier::*;
        match self {
            S => 100,
            A => 84,
            B => 69,
            C => 54,
        }
    }

    pub fn band(self) -> RangeInclusive<u8> {
        self.min_percent()..=self.max_percent()
    }

    pub fn title(self) -> &'static str {
        use RankTier::*;
        match self {
            S => "トップ校圏内",
            A => "上位校圏内",
            B => "中堅校圏内",
            C => "基礎固めの段階",
        }
    }
}

/// The first tier, scanning from the top, whose lower bound is reached.
pub fn rank_of(percent: Percent) -> RankTier {
    enum_iterator::all::<RankTier>()
        .find(|tier| tier.min_percent() <= percent.get())
        .unwrap_or(RankTier::C)
}
