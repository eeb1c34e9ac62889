//! Yahoo Finance Request Types
//!
//! Enumerated request parameters accepted by the chart and trending
//! endpoints, plus the validation rules applied to free-form inputs before
//! anything is sent upstream.

use crate::error::ProviderError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// quoteSummary modules requested by the fundamentals lookup
pub const FUNDAMENTALS_MODULES: [&str; 6] = [
    "financialData",
    "defaultKeyStatistics",
    "incomeStatementHistory",
    "balanceSheetHistory",
    "cashflowStatementHistory",
    "earningsHistory",
];

/// Number of results requested from the search endpoint
pub const SEARCH_QUOTES_COUNT: u32 = 10;

/// Number of tickers requested from the trending endpoint
pub const TRENDING_COUNT: u32 = 20;

/// Historical chart range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum ChartRange {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[default]
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "max")]
    Max,
}

impl ChartRange {
    pub const ALL: [ChartRange; 11] = [
        ChartRange::OneDay,
        ChartRange::FiveDays,
        ChartRange::OneMonth,
        ChartRange::ThreeMonths,
        ChartRange::SixMonths,
        ChartRange::OneYear,
        ChartRange::TwoYears,
        ChartRange::FiveYears,
        ChartRange::TenYears,
        ChartRange::YearToDate,
        ChartRange::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartRange::OneDay => "1d",
            ChartRange::FiveDays => "5d",
            ChartRange::OneMonth => "1mo",
            ChartRange::ThreeMonths => "3mo",
            ChartRange::SixMonths => "6mo",
            ChartRange::OneYear => "1y",
            ChartRange::TwoYears => "2y",
            ChartRange::FiveYears => "5y",
            ChartRange::TenYears => "10y",
            ChartRange::YearToDate => "ytd",
            ChartRange::Max => "max",
        }
    }
}

/// Candle interval for historical charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum ChartInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "2m")]
    TwoMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "60m")]
    SixtyMinutes,
    #[serde(rename = "90m")]
    NinetyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[default]
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
}

impl ChartInterval {
    pub const ALL: [ChartInterval; 13] = [
        ChartInterval::OneMinute,
        ChartInterval::TwoMinutes,
        ChartInterval::FiveMinutes,
        ChartInterval::FifteenMinutes,
        ChartInterval::ThirtyMinutes,
        ChartInterval::SixtyMinutes,
        ChartInterval::NinetyMinutes,
        ChartInterval::OneHour,
        ChartInterval::OneDay,
        ChartInterval::FiveDays,
        ChartInterval::OneWeek,
        ChartInterval::OneMonth,
        ChartInterval::ThreeMonths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartInterval::OneMinute => "1m",
            ChartInterval::TwoMinutes => "2m",
            ChartInterval::FiveMinutes => "5m",
            ChartInterval::FifteenMinutes => "15m",
            ChartInterval::ThirtyMinutes => "30m",
            ChartInterval::SixtyMinutes => "60m",
            ChartInterval::NinetyMinutes => "90m",
            ChartInterval::OneHour => "1h",
            ChartInterval::OneDay => "1d",
            ChartInterval::FiveDays => "5d",
            ChartInterval::OneWeek => "1wk",
            ChartInterval::OneMonth => "1mo",
            ChartInterval::ThreeMonths => "3mo",
        }
    }
}

/// Market region for trending tickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendingRegion {
    #[default]
    Us,
    Gb,
    Ca,
    De,
    Fr,
    Jp,
    Au,
    In,
    Hk,
}

impl TrendingRegion {
    pub const ALL: [TrendingRegion; 9] = [
        TrendingRegion::Us,
        TrendingRegion::Gb,
        TrendingRegion::Ca,
        TrendingRegion::De,
        TrendingRegion::Fr,
        TrendingRegion::Jp,
        TrendingRegion::Au,
        TrendingRegion::In,
        TrendingRegion::Hk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingRegion::Us => "US",
            TrendingRegion::Gb => "GB",
            TrendingRegion::Ca => "CA",
            TrendingRegion::De => "DE",
            TrendingRegion::Fr => "FR",
            TrendingRegion::Jp => "JP",
            TrendingRegion::Au => "AU",
            TrendingRegion::In => "IN",
            TrendingRegion::Hk => "HK",
        }
    }
}

macro_rules! impl_wire_str {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ProviderError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == s)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = <$ty>::ALL.iter().map(|v| v.as_str()).collect();
                        ProviderError::Validation(format!(
                            "invalid {} '{}', expected one of: {}",
                            $what,
                            s,
                            allowed.join(", ")
                        ))
                    })
            }
        }
    };
}

impl_wire_str!(ChartRange, "range");
impl_wire_str!(ChartInterval, "interval");
impl_wire_str!(TrendingRegion, "region");

/// Rejects empty or whitespace-only values for a required text input
pub fn require_non_blank(field: &str, value: &str) -> Result<(), ProviderError> {
    if value.trim().is_empty() {
        return Err(ProviderError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Validates an optional options-expiration date given as epoch seconds
///
/// An empty string counts as "not supplied". Any other value must consist of
/// ASCII digits only and is returned unchanged.
pub fn validate_expiration_date(date: Option<&str>) -> Result<Option<&str>, ProviderError> {
    match date {
        None | Some("") => Ok(None),
        Some(value) if value.bytes().all(|b| b.is_ascii_digit()) => Ok(Some(value)),
        Some(value) => Err(ProviderError::Validation(format!(
            "date must be an epoch timestamp in seconds, got '{}'",
            value
        ))),
    }
}
