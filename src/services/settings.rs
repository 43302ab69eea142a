use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Text-report display limits. JSON output always carries the full lists.
#[derive(Debug, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_list_limit")]
    pub max_challenges: usize,
    #[serde(default = "default_list_limit")]
    pub max_recommendations: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_challenges: default_list_limit(),
            max_recommendations: default_list_limit(),
        }
    }
}

fn default_list_limit() -> usize {
    5
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/ciop/config.toml");
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
