use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use derive_more::{Display, Error};
use once_cell::sync::Lazy;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::from_env(|key| std::env::var(key).ok()).unwrap_or_else(|err| {
        // Logging is not set up yet; it is configured from this value.
        eprintln!("{err}, falling back to defaults");
        Config::default()
    })
});

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[display("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Build the config from `BOOKS_HOST`, `BOOKS_PORT` and `BOOKS_LOG`,
    /// using defaults for anything unset.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("BOOKS_HOST") {
            config.host = host.parse().map_err(|_| ConfigError::Invalid {
                key: "BOOKS_HOST",
                value: host,
            })?;
        }
        if let Some(port) = lookup("BOOKS_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::Invalid {
                key: "BOOKS_PORT",
                value: port,
            })?;
        }
        if let Some(level) = lookup("BOOKS_LOG") {
            config.log_level = level;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
