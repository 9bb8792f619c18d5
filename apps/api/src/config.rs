use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

/// Application configuration loaded from environment variables.
/// Start-up fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Cache is disabled when unset.
    pub redis_url: Option<String>,
    pub cache_ttl_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            redis_url: std::env::var("REDIS_URL").ok().filter(|s| !s.is_empty()),
            cache_ttl_secs: parse_env("CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let port: u16 = parse_env("RESUMESCAN_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("RESUMESCAN_TEST_TTL", " 120 ");
        let ttl: u64 = parse_env("RESUMESCAN_TEST_TTL", 0).unwrap();
        assert_eq!(ttl, 120);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUMESCAN_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("RESUMESCAN_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("RESUMESCAN_TEST_BAD_PORT"));
    }
}
