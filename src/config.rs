use std::env;

/// Used when `DATABASE_URL` is not set.
pub const FALLBACK_DATABASE_URL: &str = "sqlite:///tmp/starwars.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("DATABASE_URL is not set, falling back to local sqlite");
                FALLBACK_DATABASE_URL.to_string()
            });
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Self {
            port,
            database_url,
            host,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, FALLBACK_DATABASE_URL);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn reads_all_values() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://app:secret@db/starwars"),
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "8080"),
        ]);
        assert_eq!(config.database_url, "postgres://app:secret@db/starwars");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = config_from(&[("APP_PORT", "not-a-port")]);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn blank_database_url_falls_back() {
        let config = config_from(&[("DATABASE_URL", "  ")]);
        assert_eq!(config.database_url, FALLBACK_DATABASE_URL);
    }
}
