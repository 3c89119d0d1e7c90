use std::{path::PathBuf, time::Duration};

use campusboard_core::ApiTarget;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

use super::constants::{CONFIG_FILE_NAME, defaults, env};

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub api: ApiSettings,
    pub http: HttpSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Backend host (optionally `host:port`). Requests fail without it.
    pub domain: Option<String>,
    pub scheme: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub timeout_in_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub token_name: String,
    pub store_path: PathBuf,
}

impl ClientSettings {
    /// Loads settings from defaults, an optional `campusboard.json` in the
    /// working directory, and `CAMPUSBOARD__*` environment variables (a
    /// `.env` file is honoured).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_builder(
            default_builder()?
                .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
                .add_source(
                    Environment::with_prefix(env::ENV_PREFIX)
                        .separator(env::ENV_SEPARATOR)
                        .try_parsing(true),
                ),
        )
    }

    /// Same as [`ClientSettings::load`] but reads the file at `path`, which
    /// must exist.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_builder(
            default_builder()?
                .add_source(File::with_name(path).required(true))
                .add_source(
                    Environment::with_prefix(env::ENV_PREFIX)
                        .separator(env::ENV_SEPARATOR)
                        .try_parsing(true),
                ),
        )
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn api_target(&self) -> ApiTarget {
        ApiTarget::new(self.api.domain.clone())
            .with_scheme(self.api.scheme.clone())
            .with_token_name(self.session.token_name.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.http.timeout_in_millis)
    }
}

/// Builder pre-populated with every default value.
pub fn default_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api.scheme", defaults::API_SCHEME)?
        .set_default(
            "http.timeout_in_millis",
            defaults::TIMEOUT_IN_MILLIS as i64,
        )?
        .set_default("session.token_name", defaults::TOKEN_NAME)?
        .set_default("session.store_path", defaults::STORE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_json(json: &str) -> ClientSettings {
        ClientSettings::from_builder(
            default_builder()
                .unwrap()
                .add_source(File::from_str(json, FileFormat::Json)),
        )
        .unwrap()
    }

    #[test]
    fn defaults_leave_domain_unset() {
        let settings = ClientSettings::from_builder(default_builder().unwrap()).unwrap();

        assert_eq!(settings.api.domain, None);
        assert_eq!(settings.api.scheme, "https");
        assert_eq!(settings.session.token_name, "jwtToken");
        assert_eq!(settings.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = from_json(
            r#"{
                "api": { "domain": "board.example.edu", "scheme": "http" },
                "http": { "timeout_in_millis": 250 },
                "session": { "token_name": "session", "store_path": "/tmp/jar.json" }
            }"#,
        );

        assert_eq!(settings.api.domain.as_deref(), Some("board.example.edu"));
        assert_eq!(settings.timeout(), Duration::from_millis(250));
        assert_eq!(settings.session.store_path, PathBuf::from("/tmp/jar.json"));

        let target = settings.api_target();
        assert_eq!(target.token_name(), "session");
    }
}
