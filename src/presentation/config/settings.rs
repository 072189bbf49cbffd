use std::time::Duration;

use crate::infrastructure::speech::DEFAULT_SPEECH_API_BASE_URL;

use super::environment::Environment;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub speech: SpeechSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub base_url: String,
    pub api_key: String,
    pub poll_interval: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    /// Reads configuration from the environment, falling back to defaults
    /// suitable for local runs. Credentials beyond `SPEECH_API_KEY` are
    /// assumed to be ambient in the hosting platform.
    pub fn from_env() -> Self {
        let environment = std::env::var("APP_ENV")
            .ok()
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Local);

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        let base_url = std::env::var("SPEECH_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_SPEECH_API_BASE_URL.to_string());
        let api_key = std::env::var("SPEECH_API_KEY").unwrap_or_default();
        let poll_interval = std::env::var("SPEECH_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));

        let json_format = std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

        Self {
            environment,
            server: ServerSettings { port },
            speech: SpeechSettings {
                base_url,
                api_key,
                poll_interval,
            },
            logging: LoggingSettings { json_format },
        }
    }
}
