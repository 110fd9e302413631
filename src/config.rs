use chrono::NaiveDate;
use serde::Deserialize;

use crate::utils::{CinedexResult, Clock, FixedClock, SystemClock};

impl Config {

    pub fn init() -> CinedexResult<Self> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("CINEDEX_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        Self::load(&config_path)
    }

    pub fn load(config_path: &str) -> CinedexResult<Self> {
        let config = config::Config::builder()
            // Add in config toml, if any
            .add_source(config::File::with_name(config_path).required(false))
            // Add in settings from the environment (with a prefix of CINEDEX)
            .add_source(config::Environment::with_prefix("CINEDEX").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Clock used for date rules: pinned when `validation.today` is set, wall clock otherwise.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.validation.today {
            Some(day) => Box::new(FixedClock(day)),
            None => Box::new(SystemClock),
        }
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        LogsConfig { level: default_level() }
    }
}

fn default_level() -> String { "info".to_string() }

// ===============================================================================
// Input
// ===============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    #[default]
    Create,
    Update,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// JSON payload file. "-" reads stdin.
    #[serde(default = "default_input_path")]
    pub path: String,
    #[serde(default)]
    pub kind: PayloadKind,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { path: default_input_path(), kind: PayloadKind::default() }
    }
}

fn default_input_path() -> String { "-".to_string() }

// ===============================================================================
// Output
// ===============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the JSON written to stdout.
    #[serde(default)]
    pub pretty: bool,
}

// ===============================================================================
// Validation
// ===============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    /// Overrides "today" for the release date window (YYYY-MM-DD).
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Error;

    fn from_toml(raw: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_source_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.logs.level, "info");
        assert_eq!(config.input.path, "-");
        assert_eq!(config.input.kind, PayloadKind::Create);
        assert!(!config.output.pretty);
        assert!(config.validation.today.is_none());
    }

    #[test]
    fn reads_every_section() {
        let config = from_toml(
            r#"
            [logs]
            level = "debug"

            [input]
            path = "movie.json"
            kind = "update"

            [output]
            pretty = true

            [validation]
            today = "2025-01-31"
            "#,
        );
        assert_eq!(config.logs.level, "debug");
        assert_eq!(config.input.path, "movie.json");
        assert_eq!(config.input.kind, PayloadKind::Update);
        assert!(config.output.pretty);
        assert_eq!(
            config.clock().today(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
    }

    #[test]
    fn unknown_payload_kind_is_a_config_error() {
        let path = std::env::temp_dir().join(format!("cinedex-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[input]\nkind = \"delete\"\n").unwrap();

        let result = Config::load(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("cinedex-no-such-config.toml");
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.input.kind, PayloadKind::Create);
    }
}
