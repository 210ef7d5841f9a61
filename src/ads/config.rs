use serde::{Deserialize, Serialize};

pub const LISTING_URL: &str = "http://www.mobilnisvet.com/mobilni-malioglasi";

/// Desktop user agents to rotate over when fetching the listing page.
pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2227.1 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_3) AppleWebKit/537.75.14 (KHTML, like Gecko) Version/7.0.3 Safari/7046A194A",
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:31.0) Gecko/20130401 Firefox/31.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2227.0 Safari/537.36",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub url: String,
    pub snapshot_file: String,
    pub user_agents: Option<Vec<String>>,
}

impl AppConfig {
    pub fn from_file(file_name: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(file_name)?;
        let config: AppConfig = serde_json::from_str(&contents)?;

        Ok(config)
    }

    #[allow(dead_code)]
    pub fn from_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: AppConfig = serde_json::from_str(contents)?;

        Ok(config)
    }

    /// User agents to rotate over; the built-in list unless the config
    /// overrides it with a non-empty one.
    #[must_use]
    pub fn get_user_agents(&self) -> Vec<String> {
        match &self.user_agents {
            Some(list) if !list.is_empty() => list.clone(),
            _ => DEFAULT_USER_AGENTS
                .iter()
                .map(std::string::ToString::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::AppConfig;

    #[test]
    fn test_parse_config() {
        let config = AppConfig::from_str(
            r#"{
                "url": "http://www.mobilnisvet.com/mobilni-malioglasi",
                "snapshot_file": "./snapshot.json"
            }"#,
        )
        .unwrap();

        assert_eq!(config.url, super::LISTING_URL);
        assert_eq!(config.snapshot_file, "./snapshot.json");
        assert_eq!(
            config.get_user_agents().len(),
            super::DEFAULT_USER_AGENTS.len(),
            "Default user agents not applied",
        );
    }

    #[test]
    fn test_user_agent_override() {
        let config = AppConfig::from_str(
            r#"{
                "url": "http://localhost:8080/ads",
                "snapshot_file": "./snapshot.json",
                "user_agents": ["test-agent/1.0"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.get_user_agents(), vec!["test-agent/1.0"]);
    }
}
