use serde::Deserialize;

use crate::wanikani::DEFAULT_BASE_URL;

/// Settings read from the environment (and `.env`, when the binary loads one).
#[derive(Deserialize)]
pub struct Config {
    /// `WANIKANI_API_KEY`. Optional here so that a missing key surfaces as a configuration
    /// error when a client is actually needed.
    pub wanikani_api_key: Option<String>,
    /// `WANIKANI_BASE_URL`
    #[serde(default = "default_base_url")]
    pub wanikani_base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    #[allow(clippy::wrong_self_convention)]
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
