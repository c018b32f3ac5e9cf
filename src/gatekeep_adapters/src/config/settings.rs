use config::{Config, ConfigError, Environment, File};
use gatekeep_core::{
    AuthenticationRules, RulesError, Validator,
    domain::rules::{
        DEFAULT_LOGIN_MAX_LENGTH, DEFAULT_LOGIN_MIN_LENGTH, DEFAULT_PASS_MAX_LENGTH,
        DEFAULT_PASS_MIN_LENGTH, DEFAULT_PATTERN,
    },
};
use serde::Deserialize;
use thiserror::Error;

use crate::config::constants::{
    SETTINGS_FILE,
    env::{ENV_PREFIX, ENV_SEPARATOR},
    hashing::{DEFAULT_ITERATIONS, DEFAULT_MEMORY_KIB, DEFAULT_PARALLELISM},
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid authentication rules: {0}")]
    Rules(#[from] RulesError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GatekeepSettings {
    pub rules: RulesSettings,
    pub hashing: HashingSettings,
}

/// Raw rule bounds. Signed so that negative values reach the rule checks
/// instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesSettings {
    pub login_min_length: i64,
    pub login_max_length: i64,
    pub password_min_length: i64,
    pub password_max_length: i64,
    pub login_pattern: String,
    pub password_pattern: String,
}

/// Argon2 cost parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl GatekeepSettings {
    /// Loads `.env`, then the optional `gatekeep` settings file, then
    /// `GATEKEEP__*` environment variables, later sources winning.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Self = config.try_deserialize()?;
        tracing::debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    pub fn validator(&self) -> Result<Validator, SettingsError> {
        Ok(Validator::new(self.rules.into_rules()?))
    }
}

impl RulesSettings {
    pub fn into_rules(&self) -> Result<AuthenticationRules, RulesError> {
        AuthenticationRules::new(
            self.login_max_length,
            self.password_max_length,
            self.login_min_length,
            self.password_min_length,
            &self.login_pattern,
            &self.password_pattern,
        )
    }
}

impl Default for RulesSettings {
    fn default() -> Self {
        Self {
            login_min_length: DEFAULT_LOGIN_MIN_LENGTH as i64,
            login_max_length: DEFAULT_LOGIN_MAX_LENGTH as i64,
            password_min_length: DEFAULT_PASS_MIN_LENGTH as i64,
            password_max_length: DEFAULT_PASS_MAX_LENGTH as i64,
            login_pattern: DEFAULT_PATTERN.to_owned(),
            password_pattern: DEFAULT_PATTERN.to_owned(),
        }
    }
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_MEMORY_KIB,
            iterations: DEFAULT_ITERATIONS,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}
