use anyhow::Context;
use astro_engine::ChartConfig;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Relative locations tried when no explicit path is given: the workspace
/// root, then two levels up for binaries run from `apps/<name>`.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/astro.toml", "../../configs/astro.toml"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    pub observation_point: String,
    pub ayanamsha: String,
}

impl Default for ChartSection {
    fn default() -> Self {
        let defaults = ChartConfig::default();
        Self {
            observation_point: defaults.observation_point,
            ayanamsha: defaults.ayanamsha,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AstroConfig {
    pub chart: ChartSection,
    pub logging: LoggingSection,
}

impl AstroConfig {
    /// Chart metadata echoed in chart responses.
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            observation_point: self.chart.observation_point.clone(),
            ayanamsha: self.chart.ayanamsha.clone(),
        }
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<AstroConfig> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse astro.toml: {e}"))
}

/// Read the config text from `explicit`, or from the first default path that
/// exists. `Ok(None)` means no file was found.
///
/// An explicit path that does not exist is an error.
pub fn read_config_text(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }

    for p in &DEFAULT_CONFIG_PATHS {
        match fs::read_to_string(p) {
            Ok(text) => return Ok(Some((PathBuf::from(p), text))),
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(e).with_context(|| format!("Failed to read config {p}")),
        }
    }
    Ok(None)
}

/// Load the config and report the file it came from (`None` when defaults
/// were used because no file exists).
pub fn load_config_with_source(
    explicit: Option<&Path>,
) -> anyhow::Result<(AstroConfig, Option<PathBuf>)> {
    match read_config_text(explicit)? {
        Some((path, text)) => {
            let cfg = parse_config(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?;
            Ok((cfg, Some(path)))
        }
        None => Ok((AstroConfig::default(), None)),
    }
}

pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<AstroConfig> {
    load_config_with_source(explicit).map(|(cfg, _)| cfg)
}
