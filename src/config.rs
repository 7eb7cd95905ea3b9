use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use promptcal_core::IcsOptions;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// First calendar day; prompt i lands on start_date + i days.
    pub start_date: NaiveDate,

    /// Inline prompt list, one event per entry.
    #[serde(default)]
    pub prompts: Vec<String>,

    /// Path to a text file with one prompt per line (blank lines and
    /// `#` comments skipped). Ignored when `prompts` is non-empty.
    pub prompts_file: Option<String>,

    /// Where to write the generated .ics file.
    #[serde(default = "default_output")]
    pub output: String,

    /// Document generation options.
    #[serde(default)]
    pub ics: IcsOptions,
}

fn default_output() -> String {
    "prompts.ics".to_string()
}

/// Load config from the given path (default ./promptcal.toml).
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it with your prompt schedule:\n\n\
            start_date = \"2025-07-31\"\n\
            prompts = [\n\
            \t\"Ship the work\",\n\
            \t\"Find the smallest viable audience\",\n\
            ]\n\
            output = \"prompts.ics\"\n\n\
            # or point at a text file with one prompt per line:\n\
            # prompts_file = \"prompts.txt\"",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Resolve the prompt list from inline config or the prompts file.
pub fn resolve_prompts(config: &Config) -> Result<Vec<String>> {
    if !config.prompts.is_empty() {
        return Ok(config.prompts.clone());
    }

    let Some(ref file) = config.prompts_file else {
        anyhow::bail!("Config has neither `prompts` nor `prompts_file`");
    };

    let path = expand_path(file);
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read prompts file at {}", path.display()))?;

    let prompts: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    Ok(prompts)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let config: Config = toml::from_str(
            r#"
            start_date = "2025-07-31"
            prompts = ["A", "B"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.start_date,
            NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()
        );
        assert_eq!(config.prompts, vec!["A", "B"]);
        assert_eq!(config.output, "prompts.ics");
    }

    #[test]
    fn inline_prompts_win_over_prompts_file() {
        let config: Config = toml::from_str(
            r#"
            start_date = "2025-07-31"
            prompts = ["A"]
            prompts_file = "does-not-exist.txt"
            "#,
        )
        .unwrap();

        assert_eq!(resolve_prompts(&config).unwrap(), vec!["A"]);
    }

    #[test]
    fn missing_prompt_source_is_an_error() {
        let config: Config = toml::from_str(r#"start_date = "2025-07-31""#).unwrap();
        assert!(resolve_prompts(&config).is_err());
    }
}
