use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub env: String,
    pub store: RepositoryStore,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Configuration {
    // in-memory sqlite configuration, used by dev mode and tests
    pub fn new(env: &str) -> Self {
        Configuration {
            env: env.to_string(),
            store: RepositoryStore::Sqlite,
            database_url: MEMORY_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            // every connection to sqlite::memory: opens a separate database
            max_connections: 1,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let env = lookup("BOOKS_ENV").unwrap_or_else(|| "dev".to_string());
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None if env == "prod" => {
                return Err(LibraryError::validation(vec!["DATABASE_URL is required in prod".to_string()]));
            }
            None => MEMORY_DATABASE_URL.to_string(),
        };
        let store = match lookup("BOOKS_STORE") {
            Some(name) => RepositoryStore::parse(name.as_str())?,
            None => RepositoryStore::from_url(database_url.as_str())?,
        };
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let max_connections = if database_url == MEMORY_DATABASE_URL {
            1
        } else {
            parse_number(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?
        };
        Ok(Configuration {
            env,
            store,
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<F, N>(lookup: &F, key: &str, default: N) -> LibraryResult<N>
    where F: Fn(&str) -> Option<String>, N: std::str::FromStr {
    match lookup(key) {
        Some(val) => val.parse::<N>()
            .map_err(|_| LibraryError::validation(vec![format!("{} must be a number but was {:?}", key, val)])),
        None => Ok(default),
    }
}
