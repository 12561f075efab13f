use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use crate::prelude::*;

const EN_WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CN_WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["日", "一", "二", "三", "四", "五", "六"];
const EN_MONTH_LABELS: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const CN_MONTH_LABELS: [&str; MONTHS_PER_YEAR] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

/// Closed set of supported display locales.
///
/// The upstream contract selects labels from an app-language tag where the
/// literal `"en-us"` means English and everything else falls back to
/// Chinese; [`Locale::from_tag`] preserves that mapping, while [`FromStr`]
/// rejects unknown tags for callers that want typos surfaced.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub enum Locale {
    /// English labels (`Sun..Sat`, `January..December`)
    #[display(fmt = "en-us")]
    #[serde(rename = "en-us")]
    EnUs,
    /// Chinese labels (`日..六`, `1月..12月`); the default
    #[default]
    #[display(fmt = "zh-cn")]
    #[serde(rename = "zh-cn")]
    ZhCn,
}

/// Error type for strict locale-tag parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// The tag names no supported locale.
    #[error("Unsupported locale tag: {0}")]
    Unsupported(String),
}

impl Locale {
    /// Maps an app-language tag onto a locale with the upstream fallback:
    /// the exact tag `"en-us"` selects English, anything else Chinese.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "en-us" { Self::EnUs } else { Self::ZhCn }
    }

    /// Weekday labels, Sunday first.
    pub const fn weekday_labels(self) -> [&'static str; DAYS_PER_WEEK] {
        match self {
            Self::EnUs => EN_WEEKDAY_LABELS,
            Self::ZhCn => CN_WEEKDAY_LABELS,
        }
    }

    /// Month labels, January first.
    pub const fn month_labels(self) -> [&'static str; MONTHS_PER_YEAR] {
        match self {
            Self::EnUs => EN_MONTH_LABELS,
            Self::ZhCn => CN_MONTH_LABELS,
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-us" => Ok(Self::EnUs),
            "zh-cn" => Ok(Self::ZhCn),
            other => Err(LocaleError::Unsupported(other.to_owned())),
        }
    }
}
