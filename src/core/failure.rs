use crate::model::{FailureMode, Severity};

/// Fallback when a failure mode omits probability or impact.
pub const DEFAULT_PROBABILITY: f64 = 5.0;
pub const DEFAULT_IMPACT: f64 = 5.0;

/// Combined failure-mode contribution for one asset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FailureModeSummary {
    pub risk_sum: f64,
    pub count: usize,
    pub critical_count: usize,
    pub high_count: usize,
    /// Name of the mode with the highest adjusted risk, when it has one.
    pub dominant: Option<String>,
}

impl FailureModeSummary {
    /// Per-mode average contribution. Zero for an asset with no linked
    /// failure modes, since the sum is also zero.
    pub fn average_risk(&self) -> f64 {
        self.risk_sum / self.count.max(1) as f64
    }
}

pub fn severity_multiplier(severity: Option<Severity>) -> f64 {
    match severity {
        Some(Severity::Critical) => 1.5,
        Some(Severity::High) => 1.2,
        Some(Severity::Medium) => 1.0,
        Some(Severity::Low) => 0.8,
        Some(Severity::Unknown) | None => 1.0,
    }
}

/// Folds the asset's linked failure modes into a single weighted sum.
/// An explicit risk score on a mode wins over probability x impact.
pub fn aggregate(failure_modes: &[FailureMode]) -> FailureModeSummary {
    let mut summary = FailureModeSummary {
        count: failure_modes.len(),
        ..Default::default()
    };

    let mut dominant_risk = f64::NEG_INFINITY;
    for mode in failure_modes {
        let base_risk = mode.risk_score.unwrap_or_else(|| {
            let probability = mode.probability.map(f64::from).unwrap_or(DEFAULT_PROBABILITY);
            let impact = mode.impact.map(f64::from).unwrap_or(DEFAULT_IMPACT);
            probability * impact
        });

        let adjusted_risk = base_risk * severity_multiplier(mode.severity);
        summary.risk_sum += adjusted_risk;
        if adjusted_risk > dominant_risk {
            dominant_risk = adjusted_risk;
            summary.dominant = mode.name.clone();
        }

        match mode.severity {
            Some(Severity::Critical) => summary.critical_count += 1,
            Some(Severity::High) => summary.high_count += 1,
            _ => {}
        }
    }

    summary
}
