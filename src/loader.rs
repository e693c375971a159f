use crate::model::Asset;
use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Register convention: a short alpha prefix, a dash, and a numeric id,
/// e.g. AST-0042 or PUMP-123456.
static ASSET_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,6}-\d{3,6}$").expect("valid asset number regex"));

/// Loads asset records from a single JSON file or from every `*.json` file
/// under a directory. Files are read in path order so repeated runs see the
/// register in the same order.
pub fn load_assets(path: &Path) -> Result<Vec<Asset>> {
    if !path.exists() {
        bail!("path does not exist: {}", path.display());
    }

    if path.is_file() {
        return parse_file(path);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    if files.is_empty() {
        bail!("no .json asset files found under {}", path.display());
    }

    let mut assets = Vec::new();
    for file in files {
        assets.extend(parse_file(&file)?);
    }
    Ok(assets)
}

fn parse_file(path: &Path) -> Result<Vec<Asset>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading asset file {}", path.display()))?;
    parse_assets(&content).with_context(|| format!("failed parsing asset file {}", path.display()))
}

/// A file may hold either a single record or an array of records. The
/// shape decides which parse runs, so a malformed record inside an array
/// surfaces its own field error rather than a shape mismatch.
pub fn parse_assets(content: &str) -> Result<Vec<Asset>> {
    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str::<Vec<Asset>>(content)?)
    } else {
        Ok(vec![serde_json::from_str::<Asset>(content)?])
    }
}

pub fn is_wellformed_asset_number(number: &str) -> bool {
    ASSET_NUMBER_RE.is_match(number)
}

/// Labels for assets whose number breaks the register convention, for a
/// loader warning. Malformed numbers are reported, not rejected; scoring
/// does not depend on them.
pub fn malformed_asset_numbers(assets: &[Asset]) -> Vec<String> {
    assets
        .iter()
        .filter(|asset| !is_wellformed_asset_number(&asset.asset_number))
        .map(|asset| {
            if asset.asset_number.is_empty() {
                format!("{} (no asset number)", asset.name)
            } else {
                asset.asset_number.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetCondition, AssetType};

    #[test]
    fn parses_a_single_record() {
        let parsed = parse_assets(
            r#"{
                "asset_number": "AST-0001",
                "name": "Pump Station 3",
                "asset_type": "PUMP",
                "condition": "POOR",
                "installation_date": "2015-03-20",
                "expected_lifespan_years": 25
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].asset_number, "AST-0001");
        assert_eq!(parsed[0].asset_type, AssetType::Pump);
        assert_eq!(parsed[0].condition, Some(AssetCondition::Poor));
        assert_eq!(parsed[0].expected_lifespan_years, Some(25.0));
    }

    #[test]
    fn parses_an_array_of_records() {
        let parsed = parse_assets(
            r#"[
                {"asset_number": "AST-0001", "name": "a", "asset_type": "ROAD"},
                {"asset_number": "AST-0002", "name": "b", "asset_type": "BRIDGE"}
            ]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn unknown_enum_strings_fall_back_instead_of_failing() {
        let parsed = parse_assets(
            r#"{
                "asset_number": "AST-0003",
                "name": "imported",
                "asset_type": "HOVERCRAFT_DOCK",
                "condition": "PRISTINE"
            }"#,
        )
        .unwrap();
        assert_eq!(parsed[0].asset_type, AssetType::Other);
        assert_eq!(parsed[0].condition, Some(AssetCondition::Unknown));
    }

    #[test]
    fn nested_records_and_template_parse() {
        let parsed = parse_assets(
            r#"{
                "asset_number": "AST-0004",
                "name": "nested",
                "asset_type": "PUMP",
                "maintenance_records": [{"date": "2025-06-01"}],
                "inspection_records": [{"date": "2025-07-01", "notes": "ok"}],
                "rcm_template": {
                    "name": "Pump RCM",
                    "failure_modes": [
                        {"name": "Seal failure", "probability": 8, "impact": 9, "severity": "HIGH"}
                    ]
                }
            }"#,
        )
        .unwrap();
        let asset = &parsed[0];
        assert_eq!(asset.maintenance_records.len(), 1);
        assert_eq!(asset.inspection_records.len(), 1);
        assert_eq!(asset.failure_modes().len(), 1);
        assert_eq!(asset.failure_modes()[0].name.as_deref(), Some("Seal failure"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_assets("not json").is_err());
    }

    #[test]
    fn bad_record_inside_an_array_reports_the_field_error() {
        let err = parse_assets(
            r#"[
                {"asset_number": "AST-0001", "name": "ok", "asset_type": "ROAD"},
                {"asset_number": "AST-0002", "name": "bad", "rcm_template": {
                    "failure_modes": [{"probability": "high"}]
                }}
            ]"#,
        )
        .unwrap_err();
        let message = err.to_string();
        // the array branch's error, not a shape mismatch on the whole file
        assert!(message.contains("invalid type: string"), "got: {message}");
        assert!(!message.contains("sequence"), "got: {message}");
    }

    #[test]
    fn flags_asset_numbers_off_the_register_convention() {
        assert!(is_wellformed_asset_number("AST-0001"));
        assert!(is_wellformed_asset_number("PUMP-123456"));
        assert!(!is_wellformed_asset_number("ast-0001"));
        assert!(!is_wellformed_asset_number("AST0001"));
        assert!(!is_wellformed_asset_number(""));

        let assets = parse_assets(
            r#"[
                {"asset_number": "AST-0001", "name": "ok", "asset_type": "ROAD"},
                {"asset_number": "bad#1", "name": "bad", "asset_type": "ROAD"},
                {"name": "anonymous", "asset_type": "ROAD"}
            ]"#,
        )
        .unwrap();
        let flagged = malformed_asset_numbers(&assets);
        assert_eq!(flagged, vec!["bad#1", "anonymous (no asset number)"]);
    }
}
