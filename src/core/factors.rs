use crate::model::{AssetCondition, InspectionRecord, MaintenanceRecord};
use chrono::NaiveDate;

/// Neutral sub-score used when condition or age inputs are missing.
pub const NEUTRAL_SCORE: u8 = 5;
/// Sub-score for an asset with no maintenance history at all.
pub const NO_MAINTENANCE_SCORE: u8 = 8;
/// Sub-score for an asset that has never been inspected.
pub const NO_INSPECTION_SCORE: u8 = 7;
/// Maintenance events inside this window count as "recent".
pub const RECENT_MAINTENANCE_WINDOW_DAYS: i64 = 365;

const DAYS_PER_YEAR: f64 = 365.25;

/// All four scorers are total functions returning a 1-10 sub-score.
/// Missing or unreadable inputs fall back to the documented defaults
/// instead of erroring.
pub fn condition_score(condition: Option<AssetCondition>) -> u8 {
    match condition {
        Some(AssetCondition::Excellent) => 1,
        Some(AssetCondition::Good) => 3,
        Some(AssetCondition::Fair) => 6,
        Some(AssetCondition::Poor) => 9,
        Some(AssetCondition::Critical) => 10,
        Some(AssetCondition::Unknown) | None => NEUTRAL_SCORE,
    }
}

/// Scores consumed lifespan. Assets past 90% of their expected lifespan
/// score 10; a non-positive lifespan is treated as absent.
pub fn age_score(
    installation_date: Option<NaiveDate>,
    expected_lifespan_years: Option<f64>,
    as_of: NaiveDate,
) -> u8 {
    let (Some(installed), Some(lifespan)) = (installation_date, expected_lifespan_years) else {
        return NEUTRAL_SCORE;
    };
    if lifespan <= 0.0 {
        return NEUTRAL_SCORE;
    }

    let age_years = (as_of - installed).num_days() as f64 / DAYS_PER_YEAR;
    let age_percentage = age_years / lifespan * 100.0;

    if age_percentage < 25.0 {
        2
    } else if age_percentage < 50.0 {
        4
    } else if age_percentage < 75.0 {
        6
    } else if age_percentage < 90.0 {
        8
    } else {
        10
    }
}

/// Frequent recent maintenance reads as low risk. An asset maintained four
/// or more times in the window scores 2; one never maintained scores 8.
pub fn maintenance_score(records: &[MaintenanceRecord], as_of: NaiveDate) -> u8 {
    let recent = records
        .iter()
        .filter(|record| (as_of - record.date).num_days() <= RECENT_MAINTENANCE_WINDOW_DAYS)
        .count();

    match recent {
        0 => NO_MAINTENANCE_SCORE,
        1 => 6,
        2 | 3 => 4,
        _ => 2,
    }
}

/// Scores staleness of the most recent inspection. The scorer finds the
/// newest record itself, so callers need not pre-sort the history.
pub fn inspection_score(records: &[InspectionRecord], as_of: NaiveDate) -> u8 {
    let Some(latest) = records.iter().map(|record| record.date).max() else {
        return NO_INSPECTION_SCORE;
    };

    let days_since = (as_of - latest).num_days();
    if days_since > 365 {
        8
    } else if days_since > 180 {
        6
    } else if days_since > 90 {
        4
    } else {
        2
    }
}
