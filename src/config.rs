use std::time::Duration;

pub const DEFAULT_HOST: &str = "redis";
pub const DEFAULT_PORT: u16 = 6379;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the store lives and how long a single network call may take.
///
/// Resolved once at start-up and handed to the engine; nothing re-reads
/// the environment afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    /// Bound applied to connecting, reading and writing.
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl StoreConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `host:port`, with IPv6 literals bracketed.
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn url(&self) -> String {
        format!("redis://{}/", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_redis_service() {
        let config = StoreConfig::default();
        assert_eq!(config.host, "redis");
        assert_eq!(config.port, 6379);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.url(), "redis://redis:6379/");
    }

    #[test]
    fn builder_overrides() {
        let config = StoreConfig::new("10.0.0.7")
            .with_port(7000)
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.addr(), "10.0.0.7:7000");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        assert_eq!(StoreConfig::new("::1").addr(), "[::1]:6379");
        assert_eq!(StoreConfig::new("[::1]").addr(), "[::1]:6379");
    }
}
