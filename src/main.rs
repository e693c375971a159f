mod cli;
mod config;
mod core;
mod loader;
mod model;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use cli::{AnalyzeArgs, Cli, Commands, RunArgs};
use core::AnalysisOptions;
use regex::Regex;
use std::path::{Path, PathBuf};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Trend(args) => run_trend(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `assetguard init`; writing ./assetguard.toml"
                );
            }

            let path = std::env::current_dir()?.join("assetguard.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.run.config.as_deref(), &cwd)?;
    let cfg = loaded.config;

    let assets = loader::load_assets(&resolve_path(&cwd, &args.run.path))?;
    warn_malformed(&assets);

    let pattern = args
        .pattern
        .as_deref()
        .map(|raw| Regex::new(raw).with_context(|| format!("invalid --match pattern: {raw}")))
        .transpose()?;
    let options = AnalysisOptions {
        asset_type: args.asset_type.or(cfg.analysis.asset_type),
        risk_level: args.risk_level.or(cfg.analysis.risk_level),
        pattern,
        sort_by: args.sort_by.unwrap_or(cfg.analysis.sort_by),
        limit: args.limit.unwrap_or(cfg.analysis.limit),
    };

    let report = core::run_analysis(&assets, Utc::now().date_naive(), &options, &cfg);

    let output_json = args.run.json || cfg.general.json;
    if output_json {
        let json_report = core::report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn run_trend(args: RunArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;

    let assets = loader::load_assets(&resolve_path(&cwd, &args.path))?;
    warn_malformed(&assets);

    let report = core::run_trend(&assets, Utc::now().date_naive());

    if args.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        core::report::print_trend_human(&report);
    }

    Ok(0)
}

fn warn_malformed(assets: &[model::Asset]) {
    for label in loader::malformed_asset_numbers(assets) {
        eprintln!("warning: asset number {label} does not match the register convention");
    }
}

fn resolve_path(cwd: &Path, path: &PathBuf) -> PathBuf {
    if path.is_absolute() {
        path.clone()
    } else {
        cwd.join(path)
    }
}
