pub mod factors;
pub mod failure;
pub mod rank;
pub mod report;
pub mod score;
pub mod stats;

use crate::config::Config;
use crate::core::rank::SortKey;
use crate::core::report::{ConfigSummary, FilterSummary, RiskReport, ScoredAsset, TrendReport};
use crate::core::score::{RiskFactors, RiskLevel};
use crate::core::stats::RiskStats;
use crate::model::{Asset, AssetType};
use chrono::NaiveDate;
use regex::Regex;

/// Hard cap on assets per analysis page.
pub const DEFAULT_LIMIT: usize = 50;

/// Caller-selected filters and ordering for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub asset_type: Option<AssetType>,
    pub risk_level: Option<RiskLevel>,
    pub pattern: Option<Regex>,
    pub sort_by: SortKey,
    pub limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            asset_type: None,
            risk_level: None,
            pattern: None,
            sort_by: SortKey::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Scores one asset. Total over arbitrary input records: missing fields
/// fall back to the scorers' documented defaults.
pub fn score_asset(asset: &Asset, as_of: NaiveDate) -> ScoredAsset {
    let risk_factors = RiskFactors {
        condition: factors::condition_score(asset.condition),
        age: factors::age_score(asset.installation_date, asset.expected_lifespan_years, as_of),
        maintenance_history: factors::maintenance_score(&asset.maintenance_records, as_of),
        inspection_history: factors::inspection_score(&asset.inspection_records, as_of),
    };

    let failure = failure::aggregate(asset.failure_modes());
    let overall_risk_score = score::overall_risk_score(&risk_factors, failure.average_risk());

    ScoredAsset {
        asset_number: asset.asset_number.clone(),
        name: asset.name.clone(),
        asset_type: asset.asset_type,
        status: asset.status,
        condition: asset.condition,
        priority: asset.priority,
        organisation: asset.organisation.clone(),
        risk_factors,
        overall_risk_score,
        risk_level: score::risk_level(overall_risk_score),
        failure_mode_count: failure.count,
        critical_failure_modes: failure.critical_count,
        high_failure_modes: failure.high_count,
        dominant_failure_mode: failure.dominant,
        last_inspection: asset
            .inspection_records
            .iter()
            .map(|record| record.date)
            .max(),
    }
}

/// The full single-pass pipeline: score every asset, filter, stable-sort,
/// truncate to the page limit, then summarize. Pure over its inputs; the
/// reference date is injected so runs are reproducible.
pub fn run_analysis(
    assets: &[Asset],
    as_of: NaiveDate,
    options: &AnalysisOptions,
    cfg: &Config,
) -> RiskReport {
    let scored: Vec<ScoredAsset> = assets
        .iter()
        .map(|asset| score_asset(asset, as_of))
        .collect();

    let mut selected = rank::filter_assets(scored, options);
    rank::sort_assets(&mut selected, options.sort_by);
    selected.truncate(options.limit);

    let risk_stats = RiskStats::from_assets(&selected);
    let exit = report::evaluate_exit(&selected, &risk_stats, cfg);

    RiskReport {
        assets: selected,
        risk_stats,
        filters: FilterSummary {
            asset_type: options.asset_type,
            risk_level: options.risk_level,
            pattern: options.pattern.as_ref().map(|regex| regex.to_string()),
            sort_by: options.sort_by.to_string(),
            limit: options.limit,
        },
        config: ConfigSummary {
            alert_on: cfg.general.alert_on,
            max_fleet_risk: cfg.general.max_fleet_risk,
        },
        exit,
    }
}

/// Fleet trend: average the overall scores of every asset (no filters) and
/// classify the average on the four-bucket trend scale.
pub fn run_trend(assets: &[Asset], as_of: NaiveDate) -> TrendReport {
    let scored: Vec<ScoredAsset> = assets
        .iter()
        .map(|asset| score_asset(asset, as_of))
        .collect();

    let fleet_average_score = stats::average_score(&scored);
    TrendReport {
        asset_count: scored.len(),
        fleet_average_score,
        trend: fleet_average_score.map(score::trend_level),
    }
}
