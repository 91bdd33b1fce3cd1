// Event Delivery Configuration
//
// Configuration for the collector endpoint, built explicitly or loaded
// from environment variables. There is no process-global state: a sender
// exists only once a config has been constructed for it.

use std::env;

/// Events per batch when no limit is configured.
pub const DEFAULT_BATCH_LIMIT: usize = 100;

/// Configuration for the event collector endpoint
#[derive(Debug, Clone)]
pub struct EventsConfig {
    /// Collector URL; batches are POSTed to it as-is, no path is appended
    pub endpoint: String,

    /// Advisory batch size. `send_batch` does not enforce it; `send_all`
    /// chunks by it.
    pub batch_limit: usize,
}

impl EventsConfig {
    /// Create a configuration with the default batch limit
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            batch_limit: DEFAULT_BATCH_LIMIT,
        }
    }

    /// Override the advisory batch limit
    pub fn with_batch_limit(mut self, batch_limit: usize) -> Self {
        self.batch_limit = batch_limit;
        self
    }

    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `WAYPOST_EVENTS_URL`: collector endpoint
    /// - `WAYPOST_EVENTS_BATCH_LIMIT`: events per batch (default: 100)
    ///
    /// Returns None if no endpoint is set.
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("WAYPOST_EVENTS_URL").ok()?;
        if endpoint.is_empty() {
            return None;
        }

        let batch_limit = env::var("WAYPOST_EVENTS_BATCH_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BATCH_LIMIT);

        Some(Self {
            endpoint,
            batch_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_batch_limit() {
        let config = EventsConfig::new("https://collector.example.com/events");
        assert_eq!(config.endpoint, "https://collector.example.com/events");
        assert_eq!(config.batch_limit, DEFAULT_BATCH_LIMIT);
    }

    #[test]
    fn test_config_with_batch_limit() {
        let config = EventsConfig::new("https://collector.example.com/events").with_batch_limit(25);
        assert_eq!(config.batch_limit, 25);
    }
}
