use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use committed_domain::shared::DomainError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_COOKIE: &str = "better-auth.session_token";

const DEV_ORIGINS: &[&str] = &["http://localhost:8080", "http://localhost:3000"];
const PROD_ORIGINS: &[&str] = &["https://committed.fly.dev", "https://committed-api.fly.dev"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    fn default_origins(&self) -> Vec<String> {
        let origins = match self {
            Environment::Development => DEV_ORIGINS,
            Environment::Production => PROD_ORIGINS,
        };
        origins.iter().map(|o| o.to_string()).collect()
    }
}

impl FromStr for Environment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(DomainError::Validation(format!(
                "Unknown environment: {}",
                other
            ))),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Server configuration, read from `COMMITTED_*` environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub environment: Environment,
    pub cors_origins: Vec<String>,
    pub session_cookie: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = default_data_dir();

        let port = match lookup("COMMITTED_PORT") {
            Some(value) => parse_var("COMMITTED_PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let environment = match lookup("COMMITTED_ENV") {
            Some(value) => value.parse()?,
            None => Environment::Development,
        };

        let database_path = lookup("COMMITTED_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("committed.db"));

        let log_dir = lookup("COMMITTED_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("logs"));

        let cors_origins = match lookup("COMMITTED_CORS_ORIGINS") {
            Some(value) => parse_origins(&value)?,
            None => environment.default_origins(),
        };

        let session_cookie = lookup("COMMITTED_SESSION_COOKIE")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string());
        if session_cookie.is_empty() {
            return Err(DomainError::Validation(
                "COMMITTED_SESSION_COOKIE cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            port,
            database_path,
            log_dir,
            environment,
            cors_origins,
            session_cookie,
        })
    }

    pub fn database_path_str(&self) -> Result<&str, DomainError> {
        self.database_path.to_str().ok_or_else(|| {
            DomainError::Validation(format!(
                "Database path is not valid UTF-8: {}",
                self.database_path.display()
            ))
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("committed")
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, DomainError>
where
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| DomainError::Validation(format!("Invalid {} value {:?}: {}", key, value, e)))
}

fn parse_origins(value: &str) -> Result<Vec<String>, DomainError> {
    let origins: Vec<String> = value
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if let Some(bad) = origins
        .iter()
        .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
    {
        return Err(DomainError::Validation(format!(
            "Invalid CORS origin: {}",
            bad
        )));
    }
    if origins.is_empty() {
        return Err(DomainError::Validation(
            "COMMITTED_CORS_ORIGINS must list at least one origin".to_string(),
        ));
    }

    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, DomainError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:8080", "http://localhost:3000"]
        );
        assert_eq!(config.session_cookie, "better-auth.session_token");
        assert!(config.database_path.ends_with("committed/committed.db"));
        assert!(config.log_dir.ends_with("committed/logs"));
    }

    #[test]
    fn test_production_origins() {
        let config = config_from(&[("COMMITTED_ENV", "production")]).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(
            config.cors_origins,
            vec!["https://committed.fly.dev", "https://committed-api.fly.dev"]
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("COMMITTED_PORT", "8081"),
            ("COMMITTED_DATABASE_PATH", "/tmp/habits.db"),
            ("COMMITTED_CORS_ORIGINS", "https://a.example/, https://b.example"),
            ("COMMITTED_SESSION_COOKIE", "sid"),
        ])
        .unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.database_path, PathBuf::from("/tmp/habits.db"));
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.session_cookie, "sid");
    }

    #[test]
    fn test_invalid_values_are_validation_errors() {
        for vars in [
            vec![("COMMITTED_PORT", "not-a-port")],
            vec![("COMMITTED_PORT", "70000")],
            vec![("COMMITTED_ENV", "staging")],
            vec![("COMMITTED_CORS_ORIGINS", "localhost:3000")],
            vec![("COMMITTED_CORS_ORIGINS", " , ")],
            vec![("COMMITTED_SESSION_COOKIE", "  ")],
        ] {
            let result = config_from(&vars);
            assert!(
                matches!(result, Err(DomainError::Validation(_))),
                "expected validation error for {:?}",
                vars
            );
        }
    }
}
