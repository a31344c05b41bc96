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
    /// GraphQL endpoint of the commerce backend.
    pub graphql_url: String,
    /// Backend channel slug every product query is scoped to.
    pub channel: String,
    /// Optional bearer token for the backend; storefront queries are public by default.
    pub graphql_token: Option<String>,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub rate_limit_per_minute: usize,
    /// Number of product detail pages fetched concurrently during a static build.
    pub build_concurrency: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("graphql_url", &self.graphql_url)
            .field("channel", &self.channel)
            .field(
                "graphql_token",
                &self.graphql_token.as_ref().map(|_| "[redacted]"),
            )
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .field("build_concurrency", &self.build_concurrency)
            .finish()
    }
}
