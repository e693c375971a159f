use crate::config::{AlertOn, Config};
use crate::core::score::{RiskFactors, RiskLevel, TrendLevel};
use crate::core::stats::RiskStats;
use crate::model::{AssetCondition, AssetStatus, AssetType, Priority};
use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;

/// An asset plus everything the scoring pipeline derived for it. Lives only
/// for the duration of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAsset {
    pub asset_number: String,
    pub name: String,
    pub asset_type: AssetType,
    pub status: AssetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<AssetCondition>,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
    pub risk_factors: RiskFactors,
    pub overall_risk_score: u8,
    pub risk_level: RiskLevel,
    pub failure_mode_count: usize,
    pub critical_failure_modes: usize,
    pub high_failure_modes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_failure_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_inspection: Option<NaiveDate>,
}

/// Echo of the filters that shaped the response, so callers can tell which
/// slice of the register they are looking at.
#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub sort_by: String,
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub alert_on: AlertOn,
    pub max_fleet_risk: u8,
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct RiskReport {
    pub assets: Vec<ScoredAsset>,
    pub risk_stats: RiskStats,
    pub filters: FilterSummary,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub assets: Vec<ScoredAsset>,
    pub risk_stats: RiskStats,
    pub filters: FilterSummary,
    pub config: ConfigSummary,
}

impl From<&RiskReport> for JsonReport {
    fn from(report: &RiskReport) -> Self {
        Self {
            assets: report.assets.clone(),
            risk_stats: report.risk_stats.clone(),
            filters: report.filters.clone(),
            config: report.config.clone(),
        }
    }
}

/// Fleet-wide trend result for the `trend` subcommand. Uses the four-bucket
/// scale, not the per-asset five-bucket one.
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub asset_count: usize,
    pub fleet_average_score: Option<u8>,
    pub trend: Option<TrendLevel>,
}

pub fn evaluate_exit(assets: &[ScoredAsset], stats: &RiskStats, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if cfg.general.alert_on != AlertOn::None {
        let threshold = match cfg.general.alert_on {
            AlertOn::Critical => RiskLevel::Critical,
            AlertOn::High | AlertOn::None => RiskLevel::High,
        };
        let flagged = assets
            .iter()
            .filter(|asset| asset.risk_level >= threshold)
            .count();
        if flagged > 0 {
            reasons.push(format!(
                "{} asset(s) at or above {} risk",
                flagged, threshold
            ));
        }
    }

    if let Some(average) = stats.average_risk_score
        && average > cfg.general.max_fleet_risk
    {
        reasons.push(format!(
            "fleet average risk {} exceeds max_fleet_risk {}",
            average, cfg.general.max_fleet_risk
        ));
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

fn colored_level(level: RiskLevel) -> String {
    match level {
        RiskLevel::Critical => level.as_str().red().bold().to_string(),
        RiskLevel::High => level.as_str().yellow().bold().to_string(),
        RiskLevel::Medium => level.as_str().blue().bold().to_string(),
        RiskLevel::Low => level.as_str().cyan().bold().to_string(),
        RiskLevel::VeryLow => level.as_str().green().bold().to_string(),
    }
}

pub fn print_human(report: &RiskReport) {
    match report.risk_stats.average_risk_score {
        Some(average) => println!(
            "Asset Risk Analysis: {} assets, average risk {}/100",
            report.risk_stats.total, average
        ),
        None => println!("Asset Risk Analysis: no assets matched the filters"),
    }

    for level in [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::VeryLow,
    ] {
        let grouped: Vec<&ScoredAsset> = report
            .assets
            .iter()
            .filter(|asset| asset.risk_level == level)
            .collect();

        if grouped.is_empty() {
            continue;
        }

        println!();
        println!("{} ({})", colored_level(level), grouped.len());

        for asset in grouped {
            println!(
                "[{}] {} {} ({}) - {}/100",
                asset.risk_level.as_str(),
                asset.asset_number,
                asset.name,
                asset.asset_type,
                asset.overall_risk_score
            );
            println!(
                "-> factors: condition {}, age {}, maintenance {}, inspection {}",
                asset.risk_factors.condition,
                asset.risk_factors.age,
                asset.risk_factors.maintenance_history,
                asset.risk_factors.inspection_history
            );
            if asset.failure_mode_count > 0 {
                println!(
                    "-> failure modes: {} ({} critical, {} high)",
                    asset.failure_mode_count,
                    asset.critical_failure_modes,
                    asset.high_failure_modes
                );
                if let Some(name) = &asset.dominant_failure_mode {
                    println!("-> dominant failure mode: {}", name);
                }
            }
            if let Some(last) = asset.last_inspection {
                println!("-> last inspected: {}", last);
            }
        }
    }

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

pub fn print_trend_human(report: &TrendReport) {
    match (report.fleet_average_score, report.trend) {
        (Some(average), Some(trend)) => {
            println!(
                "Fleet Risk Trend: {}/100 ({}) across {} assets",
                average, trend, report.asset_count
            );
        }
        _ => println!("Fleet Risk Trend: no assets to analyze"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score::{RiskFactors, risk_level};
    use crate::model::{AssetStatus, Priority};

    fn scored(score: u8) -> ScoredAsset {
        ScoredAsset {
            asset_number: "AST-0001".to_string(),
            name: "asset".to_string(),
            asset_type: AssetType::Other,
            status: AssetStatus::Active,
            condition: None,
            priority: Priority::Medium,
            organisation: None,
            risk_factors: RiskFactors {
                condition: 5,
                age: 5,
                maintenance_history: 5,
                inspection_history: 5,
            },
            overall_risk_score: score,
            risk_level: risk_level(score),
            failure_mode_count: 0,
            critical_failure_modes: 0,
            high_failure_modes: 0,
            dominant_failure_mode: None,
            last_inspection: None,
        }
    }

    fn exit_for(assets: &[ScoredAsset], cfg: &Config) -> ExitStatus {
        let stats = RiskStats::from_assets(assets);
        evaluate_exit(assets, &stats, cfg)
    }

    #[test]
    fn critical_asset_trips_both_alerts_under_defaults() {
        // score 85: CRITICAL level, and the fleet average 85 > 75
        let exit = exit_for(&[scored(85)], &Config::default());
        assert!(!exit.ok);
        assert_eq!(exit.reasons.len(), 2);
        assert!(exit.reasons[0].contains("at or above HIGH"));
        assert!(exit.reasons[1].contains("max_fleet_risk"));
    }

    #[test]
    fn quiet_fleet_passes_under_defaults() {
        let exit = exit_for(&[scored(30), scored(10)], &Config::default());
        assert!(exit.ok);
        assert!(exit.reasons.is_empty());
    }

    #[test]
    fn alert_on_critical_ignores_merely_high_assets() {
        let mut cfg = Config::default();
        cfg.general.alert_on = AlertOn::Critical;
        cfg.general.max_fleet_risk = 100;

        assert!(exit_for(&[scored(65)], &cfg).ok);

        let exit = exit_for(&[scored(85), scored(85)], &cfg);
        assert!(!exit.ok);
        assert_eq!(exit.reasons, vec!["2 asset(s) at or above CRITICAL risk"]);
    }

    #[test]
    fn alert_on_none_suppresses_the_level_alert() {
        let mut cfg = Config::default();
        cfg.general.alert_on = AlertOn::None;
        cfg.general.max_fleet_risk = 100;
        assert!(exit_for(&[scored(95)], &cfg).ok);
    }

    #[test]
    fn fleet_risk_ceiling_fires_alone() {
        let mut cfg = Config::default();
        cfg.general.alert_on = AlertOn::None;
        cfg.general.max_fleet_risk = 40;

        let exit = exit_for(&[scored(55), scored(35)], &cfg);
        assert!(!exit.ok);
        assert_eq!(exit.reasons.len(), 1);
        assert!(exit.reasons[0].contains("fleet average risk 45"));
    }
}
