//! Runtime configuration
//!
//! The API key is read from `EPIC_API_KEY` at runtime, falling back to the
//! value present when the binary was built. Endpoint bases can be pointed
//! elsewhere with `EPIC_API_BASE` and `EPIC_ARCHIVE_BASE`.

/// Default host of the EPIC metadata API
pub const DEFAULT_API_BASE: &str = "https://api.nasa.gov";
/// Default host of the EPIC image archive
pub const DEFAULT_ARCHIVE_BASE: &str = "https://epic.gsfc.nasa.gov";

const API_KEY_VAR: &str = "EPIC_API_KEY";
const API_BASE_VAR: &str = "EPIC_API_BASE";
const ARCHIVE_BASE_VAR: &str = "EPIC_ARCHIVE_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Passed verbatim as the `api_key` query parameter
    pub api_key: String,
    pub api_base: String,
    pub archive_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: option_env!("EPIC_API_KEY").unwrap_or_default().to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            archive_base: DEFAULT_ARCHIVE_BASE.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    /// Unset or empty variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: get(API_KEY_VAR).unwrap_or(defaults.api_key),
            api_base: trim_base(get(API_BASE_VAR).unwrap_or(defaults.api_base)),
            archive_base: trim_base(get(ARCHIVE_BASE_VAR).unwrap_or(defaults.archive_base)),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn trim_base(base: String) -> String {
    base.trim().trim_end_matches('/').to_string()
}
