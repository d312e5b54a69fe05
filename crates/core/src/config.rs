use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::MAX_CATALOG_SIZE;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub advisor: AdvisorConfig,
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Connection settings for the AI gift advisor service.
#[derive(Clone, Debug)]
pub struct AdvisorConfig {
    /// Absent keys are allowed here; the advisor reports the failure as a
    /// wire error code when a request actually needs one.
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout_ms: u64,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Cap on synthesized catalog size.
    pub max_results: usize,
    /// Fixed seed for reproducible catalogs; absent means thread RNG.
    pub seed: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub store_url: Option<String>,
    pub log_level: Option<String>,
    pub advisor_api_key: Option<String>,
    pub advisor_model: Option<String>,
    pub catalog_max_results: Option<usize>,
    pub catalog_seed: Option<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("config file `{path}` is not valid TOML: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("config file `{0}` does not exist")]
    MissingConfigFile(PathBuf),
    #[error("config interpolation references `{var}`, which is not set")]
    MissingEnvInterpolation { var: String },
    #[error("config interpolation is missing its closing `}}`")]
    UnterminatedInterpolation,
    #[error("environment override `{key}` has an unusable value `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("{0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            advisor: AdvisorConfig {
                api_key: None,
                base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-4o".to_string(),
                timeout_secs: 30,
                max_retries: 2,
            },
            store: StoreConfig {
                url: "sqlite://giftery.db".to_string(),
                max_connections: 5,
                busy_timeout_ms: 5_000,
            },
            catalog: CatalogConfig { max_results: MAX_CATALOG_SIZE, seed: None },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::Validation(format!(
                "unsupported log format `{normalized}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    /// Resolve the effective configuration.
    ///
    /// Precedence, lowest to highest: built-in defaults, a `giftery.toml`
    /// patch file, `GIFTERY_*` environment variables, caller overrides.
    /// The merged result is validated before it is handed out.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let LoadOptions { config_path, require_file, overrides } = options;
        let mut config = Self::default();

        match resolve_config_path(config_path.as_deref()) {
            Some(path) => config.apply_patch(read_patch(&path)?),
            None if require_file => {
                let wanted = config_path.unwrap_or_else(|| PathBuf::from("giftery.toml"));
                return Err(ConfigError::MissingConfigFile(wanted));
            }
            None => {}
        }

        config.apply_env_overrides()?;
        config.apply_overrides(overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        let ConfigPatch { advisor, store, catalog, logging } = patch;
        if let Some(advisor) = advisor {
            advisor.apply(&mut self.advisor);
        }
        if let Some(store) = store {
            store.apply(&mut self.store);
        }
        if let Some(catalog) = catalog {
            catalog.apply(&mut self.catalog);
        }
        if let Some(logging) = logging {
            logging.apply(&mut self.logging);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.advisor.apply_env()?;
        self.store.apply_env()?;
        self.catalog.apply_env()?;
        self.logging.apply_env()
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        // Destructured so that a new override field cannot be forgotten here.
        let ConfigOverrides {
            store_url,
            log_level,
            advisor_api_key,
            advisor_model,
            catalog_max_results,
            catalog_seed,
        } = overrides;

        if let Some(url) = store_url {
            self.store.url = url;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        if let Some(key) = advisor_api_key {
            self.advisor.api_key = Some(SecretString::from(key));
        }
        if let Some(model) = advisor_model {
            self.advisor.model = model;
        }
        if let Some(max_results) = catalog_max_results {
            self.catalog.max_results = max_results;
        }
        if let Some(seed) = catalog_seed {
            self.catalog.seed = Some(seed);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_advisor(&self.advisor)?;
        validate_store(&self.store)?;
        validate_catalog(&self.catalog)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

impl AdvisorConfig {
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(key) = non_blank_env("GIFTERY_ADVISOR_API_KEY") {
            self.api_key = Some(SecretString::from(key));
        }
        if let Some(url) = non_blank_env("GIFTERY_ADVISOR_BASE_URL") {
            self.base_url = url;
        }
        if let Some(model) = non_blank_env("GIFTERY_ADVISOR_MODEL") {
            self.model = model;
        }
        if let Some(raw) = non_blank_env("GIFTERY_ADVISOR_TIMEOUT_SECS") {
            self.timeout_secs = parse_env("GIFTERY_ADVISOR_TIMEOUT_SECS", &raw)?;
        }
        if let Some(raw) = non_blank_env("GIFTERY_ADVISOR_MAX_RETRIES") {
            self.max_retries = parse_env("GIFTERY_ADVISOR_MAX_RETRIES", &raw)?;
        }
        Ok(())
    }
}

impl StoreConfig {
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        // GIFTERY_DATABASE_URL is the pre-rename spelling some deployments
        // still carry.
        let url = non_blank_env("GIFTERY_STORE_URL")
            .or_else(|| non_blank_env("GIFTERY_DATABASE_URL"));
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(raw) = non_blank_env("GIFTERY_STORE_MAX_CONNECTIONS") {
            self.max_connections = parse_env("GIFTERY_STORE_MAX_CONNECTIONS", &raw)?;
        }
        if let Some(raw) = non_blank_env("GIFTERY_STORE_BUSY_TIMEOUT_MS") {
            self.busy_timeout_ms = parse_env("GIFTERY_STORE_BUSY_TIMEOUT_MS", &raw)?;
        }
        Ok(())
    }
}

impl CatalogConfig {
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(raw) = non_blank_env("GIFTERY_CATALOG_MAX_RESULTS") {
            self.max_results = parse_env("GIFTERY_CATALOG_MAX_RESULTS", &raw)?;
        }
        if let Some(raw) = non_blank_env("GIFTERY_CATALOG_SEED") {
            self.seed = Some(parse_env("GIFTERY_CATALOG_SEED", &raw)?);
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        let level = non_blank_env("GIFTERY_LOGGING_LEVEL")
            .or_else(|| non_blank_env("GIFTERY_LOG_LEVEL"));
        if let Some(level) = level {
            self.level = level;
        }
        let format = non_blank_env("GIFTERY_LOGGING_FORMAT")
            .or_else(|| non_blank_env("GIFTERY_LOG_FORMAT"));
        if let Some(format) = format {
            self.format = format.parse()?;
        }
        Ok(())
    }
}

/// An explicit path must point at a real file; without one the loader
/// probes the conventional locations and treats absence as "defaults only".
fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) if path.exists() => Some(path.to_path_buf()),
        Some(_) => None,
        None => ["giftery.toml", "config/giftery.toml"]
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists()),
    }
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    let expanded = interpolate_env_vars(&raw)?;
    toml::from_str(&expanded)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

/// Expand `${VAR}` references in raw file content before TOML parsing, so
/// secrets can live in the environment while the file stays committable.
fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ConfigError::UnterminatedInterpolation);
        };
        let var = &after[..end];
        let value = env::var(var)
            .map_err(|_| ConfigError::MissingEnvInterpolation { var: var.to_string() })?;
        output.push_str(&value);
        rest = &after[end + 1..];
    }

    output.push_str(rest);
    Ok(output)
}

fn validate_advisor(advisor: &AdvisorConfig) -> Result<(), ConfigError> {
    if !(1..=300).contains(&advisor.timeout_secs) {
        return Err(ConfigError::Validation(
            "advisor.timeout_secs must be in range 1..=300".to_string(),
        ));
    }

    let base_url = advisor.base_url.trim();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::Validation(
            "advisor.base_url must start with http:// or https://".to_string(),
        ));
    }

    if advisor.model.trim().is_empty() {
        return Err(ConfigError::Validation("advisor.model must not be empty".to_string()));
    }

    Ok(())
}

fn validate_store(store: &StoreConfig) -> Result<(), ConfigError> {
    let url = store.url.trim();
    let sqlite_url =
        url.starts_with("sqlite://") || url.starts_with("sqlite::") || url == ":memory:";
    if !sqlite_url {
        return Err(ConfigError::Validation(
            "store.url must be a sqlite URL (`sqlite://...`, `sqlite::...`, or `:memory:`)"
                .to_string(),
        ));
    }

    if !(1..=64).contains(&store.max_connections) {
        return Err(ConfigError::Validation(
            "store.max_connections must be in range 1..=64".to_string(),
        ));
    }

    if !(1..=60_000).contains(&store.busy_timeout_ms) {
        return Err(ConfigError::Validation(
            "store.busy_timeout_ms must be in range 1..=60000".to_string(),
        ));
    }

    Ok(())
}

fn validate_catalog(catalog: &CatalogConfig) -> Result<(), ConfigError> {
    if !(1..=MAX_CATALOG_SIZE).contains(&catalog.max_results) {
        return Err(ConfigError::Validation(format!(
            "catalog.max_results must be in range 1..={MAX_CATALOG_SIZE}"
        )));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    let level = logging.level.trim().to_ascii_lowercase();
    if LEVELS.contains(&level.as_str()) {
        Ok(())
    } else {
        Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        ))
    }
}

/// Blank environment values count as unset.
fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    advisor: Option<AdvisorPatch>,
    store: Option<StorePatch>,
    catalog: Option<CatalogPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct AdvisorPatch {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
    max_retries: Option<u32>,
}

impl AdvisorPatch {
    fn apply(self, target: &mut AdvisorConfig) {
        if let Some(key) = self.api_key {
            target.api_key = Some(SecretString::from(key));
        }
        if let Some(url) = self.base_url {
            target.base_url = url;
        }
        if let Some(model) = self.model {
            target.model = model;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            target.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = self.max_retries {
            target.max_retries = max_retries;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct StorePatch {
    url: Option<String>,
    max_connections: Option<u32>,
    busy_timeout_ms: Option<u64>,
}

impl StorePatch {
    fn apply(self, target: &mut StoreConfig) {
        if let Some(url) = self.url {
            target.url = url;
        }
        if let Some(max_connections) = self.max_connections {
            target.max_connections = max_connections;
        }
        if let Some(busy_timeout_ms) = self.busy_timeout_ms {
            target.busy_timeout_ms = busy_timeout_ms;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPatch {
    max_results: Option<usize>,
    seed: Option<u64>,
}

impl CatalogPatch {
    fn apply(self, target: &mut CatalogConfig) {
        if let Some(max_results) = self.max_results {
            target.max_results = max_results;
        }
        if let Some(seed) = self.seed {
            target.seed = Some(seed);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl LoggingPatch {
    fn apply(self, target: &mut LoggingConfig) {
        if let Some(level) = self.level {
            target.level = level;
        }
        if let Some(format) = self.format {
            target.format = format;
        }
    }
}
