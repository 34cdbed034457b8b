use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{CorsSettings, LoggingSettings, ServerOverrides, ServerSettings, Settings};

/// Prefix of the environment variables that override file values,
/// e.g. `FINLENS__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "FINLENS";

/// Base name of the configuration file looked up in the working directory.
const DEFAULT_CONFIG_NAME: &str = "finlens";

/// Loads the application settings.
///
/// Values are layered from the built-in defaults, then the configuration file
/// (`path` if given and required to exist, otherwise an optional `finlens.toml`
/// in the working directory), then `FINLENS__*` environment variables.
/// The result is not validated; call `Settings::validate` once all overrides
/// are applied.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_settings_with_env(path, None)
}

/// Like `load_settings`, but reads overrides from `env` instead of the process
/// environment when it is `Some`.
pub fn load_settings_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let environment = config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
        .source(env);

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    tracing::debug!(?settings, "Loaded configuration.");

    Ok(settings)
}
