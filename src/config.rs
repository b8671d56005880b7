//! Runtime configuration read from the environment.

use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Optional panels. A backend that lacks the matching endpoints can run with
/// the panel switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub tags: bool,
    pub statistics: bool,
    pub calendar: bool,
}

impl Capabilities {
    pub const fn all() -> Self {
        Self {
            tags: true,
            statistics: true,
            calendar: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            tags: false,
            statistics: false,
            calendar: false,
        }
    }

    /// Parse a comma-separated feature list such as `tags,calendar`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut caps = Self::none();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name {
                "tags" => caps.tags = true,
                "statistics" => caps.statistics = true,
                "calendar" => caps.calendar = true,
                other => {
                    return Err(ConfigError::Invalid(format!(
                        "unknown feature `{other}` in TAGNOTE_FEATURES"
                    )))
                }
            }
        }
        Ok(caps)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Clone)]
pub struct ClientConfig {
    pub api_base: Url,
    pub bind_addr: String,
    pub page_size: u32,
    pub request_timeout: Option<Duration>,
    pub capabilities: Capabilities,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ClientConfig")
            .field("api_base", &self.api_base.as_str())
            .field("bind_addr", &self.bind_addr)
            .field("page_size", &self.page_size)
            .field("request_timeout", &self.request_timeout)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let api_base = parse_api_base(
            &lookup("TAGNOTE_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        )?;

        let bind_addr = lookup("TAGNOTE_BIND_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let page_size = match lookup("TAGNOTE_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        let timeout_secs = match lookup("TAGNOTE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "TAGNOTE_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got `{raw}`"
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let request_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let capabilities = match lookup("TAGNOTE_FEATURES") {
            Some(raw) => Capabilities::parse(&raw)?,
            None => Capabilities::all(),
        };

        Ok(Self {
            api_base,
            bind_addr,
            page_size,
            request_timeout,
            capabilities,
        })
    }

    /// Config pointing at `api_base` with every other value defaulted.
    pub fn for_api_base(api_base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            capabilities: Capabilities::all(),
        })
    }
}

/// The API root always ends with `/` so relative joins stay below it.
fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingVar("TAGNOTE_API_BASE"));
    }
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| ConfigError::Invalid(format!("TAGNOTE_API_BASE `{trimmed}`: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid(format!(
            "TAGNOTE_API_BASE must use http or https, got `{other}`"
        ))),
    }
}

fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Ok(size),
        _ => Err(ConfigError::Invalid(format!(
            "TAGNOTE_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}, got `{raw}`"
        ))),
    }
}
