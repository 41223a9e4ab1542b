//! Configuration file loading for boostcheck.
//!
//! Discovers and loads `boostcheck.toml` from the project root and merges it
//! with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "boostcheck.toml";

/// Output format for the check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level configuration from boostcheck.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoostcheckConfig {
    /// Settings for the `check` command.
    pub check: CheckConfig,
}

/// `[check]` section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Never prompt; decline any upgrade offer.
    pub non_interactive: bool,

    /// Default output format.
    pub format: Option<OutputFormat>,
}

/// Merged check options. CLI flags take precedence over the config file.
#[derive(Debug, Clone, Copy)]
pub struct MergedCheck {
    pub non_interactive: bool,
    pub format: OutputFormat,
}

pub fn merge_check_args(
    config: &BoostcheckConfig,
    non_interactive_flag: bool,
    format_flag: Option<OutputFormat>,
) -> MergedCheck {
    MergedCheck {
        non_interactive: non_interactive_flag || config.check.non_interactive,
        format: format_flag.or(config.check.format).unwrap_or_default(),
    }
}

/// Discover the boostcheck.toml config file in the project root.
pub fn discover_config(project_dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a boostcheck.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<BoostcheckConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<BoostcheckConfig> {
    let config: BoostcheckConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the project root, or return defaults if not found.
pub fn load_or_default(project_dir: &Utf8Path) -> anyhow::Result<BoostcheckConfig> {
    match discover_config(project_dir) {
        Some(path) => load_config(&path),
        None => Ok(BoostcheckConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").expect("parse");
        assert!(!config.check.non_interactive);
        assert_eq!(config.check.format, None);
    }

    #[test]
    fn parses_the_check_section() {
        let config = parse_config(
            r#"
[check]
non_interactive = true
format = "json"
"#,
        )
        .expect("parse");
        assert!(config.check.non_interactive);
        assert_eq!(config.check.format, Some(OutputFormat::Json));
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(parse_config("[check\nbroken").is_err());
    }

    #[test]
    fn cli_flags_win_over_the_file() {
        let config = parse_config(
            r#"
[check]
non_interactive = false
format = "json"
"#,
        )
        .expect("parse");
        let merged = merge_check_args(&config, true, Some(OutputFormat::Text));
        assert!(merged.non_interactive);
        assert_eq!(merged.format, OutputFormat::Text);
    }

    #[test]
    fn file_fills_in_missing_flags() {
        let config = parse_config(
            r#"
[check]
non_interactive = true
format = "json"
"#,
        )
        .expect("parse");
        let merged = merge_check_args(&config, false, None);
        assert!(merged.non_interactive);
        assert_eq!(merged.format, OutputFormat::Json);
    }
}
