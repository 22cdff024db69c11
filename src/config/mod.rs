//! Configuration module for the Pokédex backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DB_PATH: &str = "./data/pokedex.sqlite";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// How version sprite titles outside the known generation list are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteTitlePolicy {
    /// Store every title verbatim.
    #[default]
    Keep,
    /// Store only recognized generation titles, everything else becomes null.
    Recognized,
}

impl FromStr for SpriteTitlePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(SpriteTitlePolicy::Keep),
            "recognized" => Ok(SpriteTitlePolicy::Recognized),
            other => Err(format!("unknown sprite title policy '{}'", other)),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Page size used by the paginated listing when no limit is given
    pub page_size: u32,
    /// Maximum accepted request body, in bytes
    pub body_limit: usize,
    pub sprite_titles: SpriteTitlePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3000))),
            log_level: "info".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            body_limit: DEFAULT_BODY_LIMIT,
            sprite_titles: SpriteTitlePolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let db_path = env::var("POKEDEX_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let bind_addr = parse_var("POKEDEX_BIND_ADDR", defaults.bind_addr);
        let log_level = env::var("POKEDEX_LOG_LEVEL").unwrap_or(defaults.log_level);

        let page_size = match parse_var("POKEDEX_PAGE_SIZE", defaults.page_size) {
            0 => {
                tracing::warn!("POKEDEX_PAGE_SIZE must be positive, using {}", DEFAULT_PAGE_SIZE);
                DEFAULT_PAGE_SIZE
            }
            n => n,
        };

        let body_limit = parse_var("POKEDEX_BODY_LIMIT", defaults.body_limit);
        let sprite_titles = parse_var("POKEDEX_SPRITE_TITLES", defaults.sprite_titles);

        Self {
            db_path,
            bind_addr,
            log_level,
            page_size,
            body_limit,
            sprite_titles,
        }
    }
}

/// Read and parse a variable, falling back to `default` when it is unset or invalid.
fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid {} value '{}': {}", name, raw, e);
            default
        }),
        Err(_) => default,
    }
}
