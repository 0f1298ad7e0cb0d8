//! Load `ServerConfig` from environment variables (after `.env` via dotenvy).

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

impl ServerConfig {
    /// Read configuration from the process environment. Unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let schema = get("STUDENT_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        let bind_addr: SocketAddr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections: u32 = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), Some(DEFAULT_MAX_CONNECTIONS))?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                message: "must be at least 1".into(),
            });
        }
        let max_body_bytes: usize = parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), Some(DEFAULT_MAX_BODY_BYTES))?;
        let storage = match get("STORAGE_BACKEND") {
            Some(v) => StorageBackend::from_str(&v).map_err(|message| ConfigError::Invalid {
                key: "STORAGE_BACKEND",
                message,
            })?,
            None => StorageBackend::Postgres,
        };
        let cors_allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(ServerConfig {
            database_url,
            schema,
            bind_addr,
            max_connections,
            cors_allowed_origins,
            max_body_bytes,
            storage,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: format!("'{}': {}", v, e),
        }),
        None => default.ok_or_else(|| ConfigError::Invalid {
            key,
            message: "no default".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.schema, "public");
        assert_eq!(cfg.bind_addr.port(), 8081);
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.storage, StorageBackend::Postgres);
        assert_eq!(
            cfg.cors_allowed_origins,
            vec!["http://localhost:8000", "http://127.0.0.1:8000", "file://"]
        );
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("STORAGE_BACKEND", "Memory"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("STUDENT_SCHEMA", " school "),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(cfg.storage, StorageBackend::Memory);
        assert_eq!(cfg.cors_allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.schema, "school");
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let cfg = config_from(&[("BIND_ADDR", "  "), ("DATABASE_URL", "")]).unwrap();
        assert_eq!(cfg.bind_addr.port(), 8081);
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("DB_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config_from(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config_from(&[("STORAGE_BACKEND", "redis")]),
            Err(ConfigError::Invalid { key: "STORAGE_BACKEND", .. })
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::Invalid { key: "BIND_ADDR", .. })
        ));
    }
}
