include!("config/defaults.rs");

use std::{env, error::Error as StdError, fmt, path::PathBuf, result::Result as StdResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Missing(&'static str),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "Environment variable {} is not set", name),
        }
    }
}
impl StdError for Error {}

pub type Result<T> = StdResult<T, Error>;

/// Process-wide settings, read once at startup and passed down by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub auth_url: String,
    pub solution_url: String,
    pub email: String,
    pub password: String,
    pub solution_root: PathBuf,
    pub cache_path: PathBuf,
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String> {
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
                _ => Err(Error::Missing(key)),
            }
        };
        let optional = |key: &str, default: &str| -> PathBuf {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
                .into()
        };
        Ok(Config {
            auth_url: trim_url(required(vars::AUTH_URL)?),
            solution_url: trim_url(required(vars::SOLUTION_URL)?),
            email: required(vars::SYSTEM_USER_ID)?,
            password: required(vars::SYSTEM_USER_PW)?,
            solution_root: optional(vars::SOLUTION_ROOT, path::SOLUTION_ROOT),
            cache_path: optional(vars::CACHE_PATH, path::CACHE_PATH),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reads_required_and_defaults() {
        let config = Config::from_lookup(lookup(&[
            (vars::AUTH_URL, "https://auth.example.com/"),
            (vars::SOLUTION_URL, "https://api.example.com"),
            (vars::SYSTEM_USER_ID, "bot@example.com"),
            (vars::SYSTEM_USER_PW, "hunter2"),
        ]))
        .unwrap();
        assert_eq!(config.auth_url, "https://auth.example.com");
        assert_eq!(config.solution_url, "https://api.example.com");
        assert_eq!(config.email, "bot@example.com");
        assert_eq!(config.solution_root, PathBuf::from(path::SOLUTION_ROOT));
        assert_eq!(config.cache_path, PathBuf::from(path::CACHE_PATH));
    }

    #[test]
    fn blank_credential_is_missing() {
        let err = Config::from_lookup(lookup(&[
            (vars::AUTH_URL, "https://auth.example.com"),
            (vars::SOLUTION_URL, "https://api.example.com"),
            (vars::SYSTEM_USER_ID, "bot@example.com"),
            (vars::SYSTEM_USER_PW, "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, Error::Missing(vars::SYSTEM_USER_PW));
    }

    #[test]
    fn overrides_paths() {
        let config = Config::from_lookup(lookup(&[
            (vars::AUTH_URL, "a"),
            (vars::SOLUTION_URL, "b"),
            (vars::SYSTEM_USER_ID, "c"),
            (vars::SYSTEM_USER_PW, "d"),
            (vars::SOLUTION_ROOT, "ps/solutions"),
            (vars::CACHE_PATH, "ps/cache.yaml"),
        ]))
        .unwrap();
        assert_eq!(config.solution_root, PathBuf::from("ps/solutions"));
        assert_eq!(config.cache_path, PathBuf::from("ps/cache.yaml"));
    }
}
