//! Server configuration loaded from environment variables.

use crate::optimizer::OptimizerConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Bind address (from ARES_HOST)
    pub host: String,
    /// HTTP port (from ARES_PORT)
    pub port: u16,
    /// Allowed CORS origins (from ARES_CORS_ORIGINS, comma-separated).
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
    /// Recommender settings; tree count from ARES_FOREST_TREES
    pub optimizer: OptimizerConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = std::env::var("ARES_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = std::env::var("ARES_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = std::env::var("ARES_CORS_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .filter(|origins| !origins.is_empty());

        let mut optimizer = OptimizerConfig::default();
        if let Some(trees) = std::env::var("ARES_FOREST_TREES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
        {
            optimizer.trees = trees;
        }

        Self {
            host,
            port,
            cors_origins,
            optimizer,
        }
    }

    /// Defaults without reading the environment (for tests).
    pub fn local() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: None,
            optimizer: OptimizerConfig::default(),
        }
    }

    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(s: &str) -> Vec<String> {
    s.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test, ,http://b.test "),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn local_config_uses_defaults() {
        let config = ServerConfig::local();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert!(config.cors_origins.is_none());
        assert_eq!(config.optimizer.trees, 200);
    }
}
