use crate::core::AnalysisOptions;
use crate::core::report::ScoredAsset;
use crate::model::AssetCondition;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    RiskScore,
    Name,
    AssetType,
    Condition,
    LastInspection,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RiskScore => write!(f, "risk-score"),
            Self::Name => write!(f, "name"),
            Self::AssetType => write!(f, "asset-type"),
            Self::Condition => write!(f, "condition"),
            Self::LastInspection => write!(f, "last-inspection"),
        }
    }
}

/// Drops assets outside the caller's filters. The page limit is applied
/// by the pipeline after sorting, so it truncates the ranked order.
pub fn filter_assets(mut assets: Vec<ScoredAsset>, options: &AnalysisOptions) -> Vec<ScoredAsset> {
    assets.retain(|asset| {
        if let Some(asset_type) = options.asset_type
            && asset.asset_type != asset_type
        {
            return false;
        }
        if let Some(level) = options.risk_level
            && asset.risk_level != level
        {
            return false;
        }
        if let Some(pattern) = &options.pattern
            && !pattern.is_match(&asset.name)
            && !pattern.is_match(&asset.asset_number)
        {
            return false;
        }
        true
    });
    assets
}

/// Stable sort: equal keys keep their input order.
pub fn sort_assets(assets: &mut [ScoredAsset], key: SortKey) {
    match key {
        SortKey::RiskScore => {
            assets.sort_by(|a, b| b.overall_risk_score.cmp(&a.overall_risk_score));
        }
        SortKey::Name => {
            assets.sort_by(|a, b| caseless_cmp(&a.name, &b.name));
        }
        SortKey::AssetType => {
            assets.sort_by(|a, b| {
                caseless_cmp(&a.asset_type.to_string(), &b.asset_type.to_string())
            });
        }
        SortKey::Condition => {
            assets.sort_by(|a, b| condition_rank(a.condition).cmp(&condition_rank(b.condition)));
        }
        SortKey::LastInspection => {
            // Option ordering puts None first ascending, so a descending
            // compare lands never-inspected assets last, as oldest.
            assets.sort_by(|a, b| b.last_inspection.cmp(&a.last_inspection));
        }
    }
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Worst condition first; assets with no recorded condition sort last.
fn condition_rank(condition: Option<AssetCondition>) -> u8 {
    match condition {
        Some(AssetCondition::Critical) => 0,
        Some(AssetCondition::Poor) => 1,
        Some(AssetCondition::Fair) => 2,
        Some(AssetCondition::Good) => 3,
        Some(AssetCondition::Excellent) => 4,
        Some(AssetCondition::Unknown) | None => 5,
    }
}
