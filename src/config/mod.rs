use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub scraper: ScraperConfig,
}

/// Scraper configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fixed User-Agent override. When unset, a fresh randomized browser
    /// UA is generated for every request.
    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub missing_pct: MissingPctPolicy,
}

/// What to emit for `aproveitamento` when the cell is absent from a row.
///
/// The upstream source concatenated an absent value with "%" and shipped the
/// literal string "undefined%"; consumers exist that match on it, so the
/// bug-compatible form is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPctPolicy {
    #[default]
    UndefinedLiteral,
    Empty,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_timeout_secs() -> u64 {
    30
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(config::Environment::with_prefix("BRASILEIRAO").separator("__"))
            .build()?;

        let app_cfg: AppConfig = cfg.try_deserialize().unwrap_or_else(|_| AppConfig::default());
        Ok(app_cfg)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig {
                timeout_secs: default_timeout_secs(),
                user_agent: None,
                missing_pct: MissingPctPolicy::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_preserve_undefined_pct_quirk() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.scraper.timeout_secs, 30);
        assert_eq!(cfg.scraper.user_agent, None);
        assert_eq!(cfg.scraper.missing_pct, MissingPctPolicy::UndefinedLiteral);
    }

    #[test]
    fn missing_pct_policy_deserializes_snake_case() {
        let policy: MissingPctPolicy = serde_json::from_str(r#""empty""#).unwrap();
        assert_eq!(policy, MissingPctPolicy::Empty);
    }
}
