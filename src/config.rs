use std::env;
use std::net::SocketAddr;

pub const DEFAULT_DB_CONNECTION_STRING: &str = "data/messages.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7002;

/// Server settings resolved from the environment (after `.env` is loaded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_connection_string: String,
    pub host: String,
    pub port: u16,
    pub log_requests: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_connection_string: DEFAULT_DB_CONNECTION_STRING.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_requests: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(db) = lookup("DB_CONNECTION_STRING").filter(|v| !v.trim().is_empty()) {
            config.db_connection_string = db;
        }
        if let Some(host) = lookup("HOST").filter(|v| !v.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => log::warn!("Ignoring invalid PORT `{port}`: {err}"),
            }
        }
        // Request logging stays off under test, like the dev logger it replaces.
        config.log_requests = lookup("APP_ENV").as_deref() != Some("test");

        config
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
