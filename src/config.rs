use std::env;
use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;
use url::Url;

use crate::error::{Error, Result};

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CHAT_POLL_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL every resource path is joined onto.
    pub api_url: Url,
    /// Timeout applied to every outgoing request.
    pub http_timeout: Duration,
    /// Interval between chat conversation polls.
    pub chat_poll_interval: Duration,
    /// Where the session survives process restarts. `None` keeps it in memory.
    pub session_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            chat_poll_interval: Duration::from_millis(DEFAULT_CHAT_POLL_MS),
            session_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let api_url = match env::var("RECRUITO_API_URL") {
            Ok(raw) => Url::parse(&raw)
                .map_err(|e| Error::Config(format!("Invalid RECRUITO_API_URL: {}", e)))?,
            Err(_) => Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        };

        Ok(Self {
            api_url,
            http_timeout: Duration::from_secs(get_env_parse(
                "RECRUITO_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
            chat_poll_interval: Duration::from_millis(get_env_parse(
                "RECRUITO_CHAT_POLL_MS",
                DEFAULT_CHAT_POLL_MS,
            )?),
            session_file: env::var("RECRUITO_SESSION_FILE").ok().map(PathBuf::from),
        })
    }

    pub fn with_api_url(mut self, raw: &str) -> Result<Self> {
        self.api_url =
            Url::parse(raw).map_err(|e| Error::Config(format!("Invalid API URL: {}", e)))?;
        Ok(self)
    }
}

fn get_env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
