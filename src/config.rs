//! Gateway configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "https://bildy-rpmaya.koyeb.app/api";
pub const DEFAULT_PROTECTED_PATHS: &str = "/,/clientes,/proyectos,/albaranes";
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid PROTECTED_PATHS entry: {0}")]
    InvalidProtectedPath(String),
    #[error("invalid LOGIN_PATH: {0}")]
    InvalidLoginPath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the remote invoicing service, without a trailing slash.
    pub api_base_url: String,
    /// Page paths gated on session presence. Exact matches only.
    pub protected_paths: Vec<String>,
    pub login_path: String,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `API_BASE_URL`: remote service base URL
    /// - `PROTECTED_PATHS`: comma-separated page paths requiring a session
    /// - `LOGIN_PATH`: redirect target for unauthenticated navigation
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var("PORT").ok(),
            std::env::var("API_BASE_URL").ok(),
            std::env::var("PROTECTED_PATHS").ok(),
            std::env::var("LOGIN_PATH").ok(),
        )
    }

    fn from_parts(
        port: Option<String>,
        api_base_url: Option<String>,
        protected_paths: Option<String>,
        login_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let protected_paths =
            parse_protected_paths(protected_paths.as_deref().unwrap_or(DEFAULT_PROTECTED_PATHS))?;

        let login_path = login_path.unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_owned());
        if !login_path.starts_with('/') {
            return Err(ConfigError::InvalidLoginPath(login_path));
        }

        Ok(Self { port, api_base_url, protected_paths, login_path })
    }
}

fn parse_protected_paths(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut paths = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if !entry.starts_with('/') {
            return Err(ConfigError::InvalidProtectedPath(entry.to_owned()));
        }
        paths.push(entry.to_owned());
    }
    Ok(paths)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
