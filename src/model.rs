use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One record in a council asset register, as exported by the upstream
/// asset-management system. All scoring inputs are optional; the scorers
/// substitute documented defaults for anything missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub asset_number: String,
    pub name: String,
    pub asset_type: AssetType,
    pub status: AssetStatus,
    pub condition: Option<AssetCondition>,
    pub priority: Priority,
    pub organisation: Option<String>,
    pub installation_date: Option<NaiveDate>,
    pub expected_lifespan_years: Option<f64>,
    pub maintenance_records: Vec<MaintenanceRecord>,
    pub inspection_records: Vec<InspectionRecord>,
    pub rcm_template: Option<RcmTemplate>,
}

impl Default for Asset {
    fn default() -> Self {
        Self {
            asset_number: String::new(),
            name: String::new(),
            asset_type: AssetType::Other,
            status: AssetStatus::Active,
            condition: None,
            priority: Priority::Medium,
            organisation: None,
            installation_date: None,
            expected_lifespan_years: None,
            maintenance_records: Vec::new(),
            inspection_records: Vec::new(),
            rcm_template: None,
        }
    }
}

impl Asset {
    /// Failure modes reach the asset indirectly through its RCM template.
    pub fn failure_modes(&self) -> &[FailureMode] {
        self.rcm_template
            .as_ref()
            .map(|template| template.failure_modes.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Building,
    Road,
    Bridge,
    Footpath,
    CarPark,
    Park,
    Playground,
    SportsFacility,
    CommunityCentre,
    Library,
    Vehicle,
    Plant,
    Pump,
    Drainage,
    WaterSupply,
    Sewerage,
    StreetLight,
    TrafficSignal,
    WasteFacility,
    #[serde(other)]
    Other,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Building => write!(f, "Building"),
            Self::Road => write!(f, "Road"),
            Self::Bridge => write!(f, "Bridge"),
            Self::Footpath => write!(f, "Footpath"),
            Self::CarPark => write!(f, "Car Park"),
            Self::Park => write!(f, "Park"),
            Self::Playground => write!(f, "Playground"),
            Self::SportsFacility => write!(f, "Sports Facility"),
            Self::CommunityCentre => write!(f, "Community Centre"),
            Self::Library => write!(f, "Library"),
            Self::Vehicle => write!(f, "Vehicle"),
            Self::Plant => write!(f, "Plant"),
            Self::Pump => write!(f, "Pump"),
            Self::Drainage => write!(f, "Drainage"),
            Self::WaterSupply => write!(f, "Water Supply"),
            Self::Sewerage => write!(f, "Sewerage"),
            Self::StreetLight => write!(f, "Street Light"),
            Self::TrafficSignal => write!(f, "Traffic Signal"),
            Self::WasteFacility => write!(f, "Waste Facility"),
            Self::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    Active,
    Inactive,
    UnderMaintenance,
    Decommissioned,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

/// Append-only history entries. Only the dates matter to the scorers, so
/// any free-text fields in the export are ignored on parse.
#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceRecord {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectionRecord {
    pub date: NaiveDate,
}

/// Reliability-centered maintenance template linking failure modes to an
/// asset class.
#[derive(Debug, Clone, Deserialize)]
pub struct RcmTemplate {
    #[serde(default)]
    pub failure_modes: Vec<FailureMode>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FailureMode {
    pub name: Option<String>,
    /// 1-10 likelihood of the failure occurring.
    pub probability: Option<u8>,
    /// 1-10 consequence if it does.
    pub impact: Option<u8>,
    /// Precomputed risk score; takes precedence over probability * impact.
    pub risk_score: Option<f64>,
    pub severity: Option<Severity>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}
