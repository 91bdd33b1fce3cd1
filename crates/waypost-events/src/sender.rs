// Batch Event Sender
//
// Forwards structured events to the collector endpoint as one JSON array
// per call. Delivery is atomic from the caller's perspective: one POST per
// batch, with no retries and no partial-batch handling. Failures are
// returned to the caller and recorded via tracing; whatever error tracker
// the host application wires up as a subscriber sees them there.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::EventsConfig;
use crate::error::EventError;

/// A single structured event
///
/// Created by the caller, serialized and transmitted, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub created_at: i64,
    pub params: HashMap<String, String>,
}

impl Event {
    /// Create an event stamped with the current unix timestamp
    pub fn new(name: impl Into<String>, params: HashMap<String, String>) -> Self {
        Self::at(name, chrono::Utc::now().timestamp(), params)
    }

    /// Create an event with an explicit timestamp (unix seconds)
    pub fn at(name: impl Into<String>, created_at: i64, params: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            created_at,
            params,
        }
    }
}

/// Acknowledgement returned by the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStatus {
    pub status: bool,
}

/// Batch event sender bound to a collector endpoint
#[derive(Debug, Clone)]
pub struct EventSender {
    config: EventsConfig,
    client: Client,
}

impl EventSender {
    /// Create a sender from configuration
    pub fn new(config: EventsConfig) -> Result<Self, EventError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| EventError::Config(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create from environment configuration
    ///
    /// Returns Ok(None) when no collector endpoint is configured.
    pub fn from_env() -> Result<Option<Self>, EventError> {
        match EventsConfig::from_env() {
            Some(config) => Ok(Some(Self::new(config)?)),
            None => Ok(None),
        }
    }

    /// The configured collector endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The advisory batch size; `send_batch` does not enforce it
    pub fn batch_limit(&self) -> usize {
        self.config.batch_limit
    }

    /// POST a batch of events and return the collector's acknowledgement
    ///
    /// An empty slice still issues the request with an empty JSON array
    /// body. Batches larger than `batch_limit` are sent as-is; chunking is
    /// the caller's concern (or use [`send_all`](Self::send_all)).
    pub async fn send_batch(&self, events: &[Event]) -> Result<DeliveryStatus, EventError> {
        debug!(
            endpoint = %self.config.endpoint,
            batch_size = events.len(),
            "Sending event batch"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&events)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %self.config.endpoint, error = %e, "Event batch delivery failed");
                EventError::Connection(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                endpoint = %self.config.endpoint,
                status = %status,
                body = %body,
                "Collector rejected event batch"
            );
            return Err(EventError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let ack: DeliveryStatus = response
            .json()
            .await
            .map_err(|e| EventError::Decode(e.to_string()))?;

        debug!(accepted = ack.status, "Event batch acknowledged");
        Ok(ack)
    }

    /// Send events in chunks of `batch_limit`, stopping at the first error
    ///
    /// Returns one acknowledgement per chunk sent. An empty input sends
    /// nothing.
    pub async fn send_all(&self, events: &[Event]) -> Result<Vec<DeliveryStatus>, EventError> {
        let mut acks = Vec::new();
        for chunk in events.chunks(self.config.batch_limit.max(1)) {
            acks.push(self.send_batch(chunk).await?);
        }
        Ok(acks)
    }
}
