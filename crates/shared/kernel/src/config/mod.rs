use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides, e.g. `GSHOP__STORAGE__URL=mem://`.
pub const ENV_PREFIX: &str = "GSHOP";

/// Base name of the configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "gameshop";

/// Custom error type for config loading.
#[gshop_derive::shop_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: An explicit `path` must exist. Without one, an optional `gameshop.*` file
///    in the working directory is used when present.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `GSHOP__`. Nested structures are accessed using double underscores
///    (e.g., `GSHOP__SEED__ENABLED=false` maps to `seed.enabled`).
///
/// Types with `#[serde(default)]` sections therefore load fine from the environment alone.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly given configuration file cannot be found or parsed.
/// * The merged content does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use gshop_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            info!(path = %p.as_ref().display(), "Loading config");
            File::from(p.as_ref()).required(true)
        },
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
