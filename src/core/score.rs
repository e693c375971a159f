use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of the averaged factor scores in the composite blend.
pub const FACTOR_WEIGHT: f64 = 0.7;
/// Weight of the per-mode failure-risk average.
pub const FAILURE_MODE_WEIGHT: f64 = 0.3;

/// The four 1-10 sub-scores, computed fresh per analysis and never persisted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RiskFactors {
    pub condition: u8,
    pub age: u8,
    pub maintenance_history: u8,
    pub inspection_history: u8,
}

impl RiskFactors {
    pub fn mean(&self) -> f64 {
        f64::from(
            u16::from(self.condition)
                + u16::from(self.age)
                + u16::from(self.maintenance_history)
                + u16::from(self.inspection_history),
        ) / 4.0
    }
}

/// Blends the unweighted factor mean (70%) with the per-mode failure-risk
/// average (30%). Clamped to 0-100: a critical failure mode with maximum
/// probability and impact pushes the raw blend past the scale.
pub fn overall_risk_score(factors: &RiskFactors, failure_mode_average: f64) -> u8 {
    let raw = factors.mean() * FACTOR_WEIGHT + failure_mode_average * FAILURE_MODE_WEIGHT;
    raw.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::VeryLow => "VERY_LOW",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn risk_level(score: u8) -> RiskLevel {
    match score {
        80..=100 => RiskLevel::Critical,
        60..=79 => RiskLevel::High,
        40..=59 => RiskLevel::Medium,
        20..=39 => RiskLevel::Low,
        _ => RiskLevel::VeryLow,
    }
}

/// Four-bucket scale for the fleet risk trend. Deliberately separate from
/// [`RiskLevel`]: the trend scale has no VERY_LOW bucket and the two must
/// not be unified without a product decision.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for TrendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

pub fn trend_level(score: u8) -> TrendLevel {
    match score {
        80..=100 => TrendLevel::Critical,
        60..=79 => TrendLevel::High,
        40..=59 => TrendLevel::Medium,
        _ => TrendLevel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(condition: u8, age: u8, maintenance: u8, inspection: u8) -> RiskFactors {
        RiskFactors {
            condition,
            age,
            maintenance_history: maintenance,
            inspection_history: inspection,
        }
    }

    #[test]
    fn composite_blends_seventy_thirty() {
        // mean 7.5 * 0.7 + 86.4 * 0.3 = 5.25 + 25.92 = 31.17
        assert_eq!(overall_risk_score(&factors(10, 5, 8, 7), 86.4), 31);
    }

    #[test]
    fn composite_with_no_failure_modes_is_factor_mean_weighted() {
        // mean 4.0 * 0.7 = 2.8, rounds to 3
        assert_eq!(overall_risk_score(&factors(4, 4, 4, 4), 0.0), 3);
    }

    #[test]
    fn composite_clamps_to_scale() {
        // explicit per-mode risk scores can push the raw blend past 100
        assert_eq!(overall_risk_score(&factors(10, 10, 10, 10), 400.0), 100);
    }

    #[test]
    fn level_thresholds_are_inclusive_upward() {
        assert_eq!(risk_level(100), RiskLevel::Critical);
        assert_eq!(risk_level(80), RiskLevel::Critical);
        assert_eq!(risk_level(79), RiskLevel::High);
        assert_eq!(risk_level(60), RiskLevel::High);
        assert_eq!(risk_level(59), RiskLevel::Medium);
        assert_eq!(risk_level(40), RiskLevel::Medium);
        assert_eq!(risk_level(39), RiskLevel::Low);
        assert_eq!(risk_level(20), RiskLevel::Low);
        assert_eq!(risk_level(19), RiskLevel::VeryLow);
        assert_eq!(risk_level(0), RiskLevel::VeryLow);
    }

    #[test]
    fn trend_scale_has_no_very_low_bucket() {
        assert_eq!(trend_level(80), TrendLevel::Critical);
        assert_eq!(trend_level(60), TrendLevel::High);
        assert_eq!(trend_level(40), TrendLevel::Medium);
        assert_eq!(trend_level(39), TrendLevel::Low);
        assert_eq!(trend_level(0), TrendLevel::Low);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(RiskLevel::Critical > RiskLevel::High);
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
        assert!(RiskLevel::Low > RiskLevel::VeryLow);
    }
}
