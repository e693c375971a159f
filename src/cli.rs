use crate::core::rank::SortKey;
use crate::core::score::RiskLevel;
use crate::model::AssetType;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "assetguard",
    version,
    about = "Risk analysis for council asset registers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score every asset and report the ranked, filtered collection.
    Analyze(AnalyzeArgs),
    /// Classify the fleet-wide average risk on the trend scale.
    Trend(RunArgs),
    /// Write a default assetguard.toml in the current directory.
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Asset JSON file, or a directory of them.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub run: RunArgs,
    /// Keep only assets of this type.
    #[arg(long, value_enum)]
    pub asset_type: Option<AssetType>,
    /// Keep only assets at this risk level.
    #[arg(long, value_enum)]
    pub risk_level: Option<RiskLevel>,
    #[arg(long, value_enum)]
    pub sort_by: Option<SortKey>,
    /// Cap on reported assets (config default 50).
    #[arg(long)]
    pub limit: Option<usize>,
    /// Regex filter over asset names and numbers.
    #[arg(long = "match")]
    pub pattern: Option<String>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
