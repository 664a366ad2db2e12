use dotenv::dotenv;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub struct Config {
    pub backend_url: String,
    pub listen_addr: String,
    pub backend_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        let backend_url = std::env::var("BACKEND_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let backend_timeout_secs = match std::env::var("BACKEND_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid BACKEND_TIMEOUT_SECS {:?}: {}", raw, e))?,
            Err(_) => 30,
        };

        Ok(Config {
            backend_url: normalize_base_url(&backend_url),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:9999".to_string()),
            backend_timeout_secs,
        })
    }
}

/// Strip trailing slashes so `{base}/strategies` never doubles up.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so no other test races on these variables.
    #[test]
    fn test_from_env() {
        const KEYS: [&str; 3] = ["BACKEND_URL", "LISTEN_ADDR", "BACKEND_TIMEOUT_SECS"];
        for key in KEYS {
            std::env::remove_var(key);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.listen_addr, "0.0.0.0:9999");
        assert_eq!(config.backend_timeout_secs, 30);

        std::env::set_var("BACKEND_URL", "   ");
        assert_eq!(Config::from_env().unwrap().backend_url, DEFAULT_BACKEND_URL);

        std::env::set_var("BACKEND_URL", "https://strategies.example.com/");
        std::env::set_var("LISTEN_ADDR", "127.0.0.1:8080");
        std::env::set_var("BACKEND_TIMEOUT_SECS", " 5 ");
        let config = Config::from_env().unwrap();
        assert_eq!(config.backend_url, "https://strategies.example.com");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.backend_timeout_secs, 5);

        std::env::set_var("BACKEND_TIMEOUT_SECS", "soon");
        let err = Config::from_env().err().unwrap();
        assert!(err.to_string().contains("BACKEND_TIMEOUT_SECS"));

        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base_url(" http://api.local//"), "http://api.local");
        assert_eq!(normalize_base_url(DEFAULT_BACKEND_URL), DEFAULT_BACKEND_URL);
    }
}
