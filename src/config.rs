use serde::Deserialize;
use std::{fs, io, path::Path};

/// The prospectus configuration file.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub brand: BrandConfig,
}

impl Config {
    /// Load the config from a path. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_yaml::Error),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// The scheme used when none is passed on the command line.
    pub scheme: Option<String>,

    /// The category the template listing starts on.
    pub category: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Base URL of the custom template API.
    pub base_url: Option<String>,

    /// The user id sent with every custom template request.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// The static Authorization header value.
    pub authorization: Option<String>,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_id: default_user_id(),
            authorization: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_user_id() -> String {
    "default".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct BrandConfig {
    /// Where the brand kit JSON lives. Defaults to the platform config
    /// directory.
    pub store_path: Option<std::path::PathBuf>,
}
