use std::env;
use std::path::PathBuf;

pub const DEFAULT_CACHE_DIR: &str = "books";
pub const DEFAULT_ARCHIVE_BASE: &str = "https://www.gutenberg.org";
pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

const API_KEY_VAR: &str = "GROQ_API_KEY";
const CACHE_DIR_VAR: &str = "BOOK_CACHE_DIR";

/// Process-wide state made explicit: the cache directory, the archive and
/// completion endpoints, and the API credential. Built once at startup and
/// passed into each component, never read from the environment elsewhere.
#[derive(Debug, Clone)]
pub struct Config {
    pub cache_dir: PathBuf,
    pub archive_base: String,
    pub completion_endpoint: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Config {
        let cache_dir = env::var(CACHE_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR));

        Config {
            cache_dir,
            archive_base: String::from(DEFAULT_ARCHIVE_BASE),
            completion_endpoint: String::from(DEFAULT_COMPLETION_ENDPOINT),
            api_key: env::var(API_KEY_VAR).ok(),
        }
    }

    /// The credential is only required for analysis, so absence is not an
    /// error until an analyze action actually needs it.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        match self.api_key {
            Some(ref key) => Ok(key),
            None => Err(anyhow::Error::msg(format!(
                "{} not set: an API key is required for analysis",
                API_KEY_VAR
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn missing_api_key_is_an_error_only_on_demand() {
        let config = Config {
            cache_dir: "books".into(),
            archive_base: String::from("http://127.0.0.1:1"),
            completion_endpoint: String::from("http://127.0.0.1:1"),
            api_key: None,
        };

        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn present_api_key_is_returned() -> anyhow::Result<()> {
        let config = Config {
            cache_dir: "books".into(),
            archive_base: String::from("http://127.0.0.1:1"),
            completion_endpoint: String::from("http://127.0.0.1:1"),
            api_key: Some(String::from("gsk_test")),
        };

        assert_eq!("gsk_test", config.require_api_key()?);

        Ok(())
    }
}
