use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_NOMINATIM_HOST: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_OVERPASS_HOST: &str = "https://overpass-api.de";
pub const DEFAULT_USER_AGENT: &str = concat!("nearby-care-finder/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub nominatim_host: String,
    pub overpass_host: String,
    pub user_agent: String,
    pub places_seed_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum AppConfigError {
    InvalidBindAddr(String),
}

impl std::fmt::Display for AppConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AppConfigError::InvalidBindAddr(e) => write!(f, "Invalid BIND_ADDR: {}", e),
        }
    }
}

impl std::error::Error for AppConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(AppConfig {
            bind_addr: bind_addr
                .parse()
                .map_err(|e| AppConfigError::InvalidBindAddr(format!("{}: {}", bind_addr, e)))?,
            nominatim_host: lookup("NOMINATIM_HOST")
                .unwrap_or_else(|| DEFAULT_NOMINATIM_HOST.to_string())
                .trim_end_matches('/')
                .to_string(),
            overpass_host: lookup("OVERPASS_HOST")
                .unwrap_or_else(|| DEFAULT_OVERPASS_HOST.to_string())
                .trim_end_matches('/')
                .to_string(),
            user_agent: lookup("HTTP_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            places_seed_path: lookup("PLACES_SEED_PATH").map(PathBuf::from),
        })
    }
}
