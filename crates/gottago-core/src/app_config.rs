use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Upstream credential. Absence is surfaced at request time (health
    /// check `hasKey`, 500 on the proxy endpoint), not at startup.
    pub yelp_api_key: Option<String>,
    pub yelp_base_url: String,
    pub geocode_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    #[must_use]
    pub fn has_key(&self) -> bool {
        self.yelp_api_key
            .as_ref()
            .is_some_and(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "yelp_api_key",
                &self.yelp_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("yelp_base_url", &self.yelp_base_url)
            .field("geocode_base_url", &self.geocode_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
