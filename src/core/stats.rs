use crate::core::report::ScoredAsset;
use crate::core::score::RiskLevel;
use serde::Serialize;

/// Aggregate statistics over the filtered collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RiskStats {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub very_low: usize,
    /// Rounded fleet average; `None` when the collection is empty rather
    /// than an undefined division result.
    pub average_risk_score: Option<u8>,
}

impl RiskStats {
    pub fn from_assets(assets: &[ScoredAsset]) -> Self {
        let mut stats = Self::default();
        for asset in assets {
            match asset.risk_level {
                RiskLevel::Critical => stats.critical += 1,
                RiskLevel::High => stats.high += 1,
                RiskLevel::Medium => stats.medium += 1,
                RiskLevel::Low => stats.low += 1,
                RiskLevel::VeryLow => stats.very_low += 1,
            }
        }
        stats.total = assets.len();
        stats.average_risk_score = average_score(assets);
        stats
    }
}

pub fn average_score(assets: &[ScoredAsset]) -> Option<u8> {
    if assets.is_empty() {
        return None;
    }

    let sum: u32 = assets
        .iter()
        .map(|asset| u32::from(asset.overall_risk_score))
        .sum();
    Some((f64::from(sum) / assets.len() as f64).round() as u8)
}
