// Batch event delivery to the application's event collector
//
// This crate provides:
// - EventsConfig: collector endpoint plus an advisory batch limit
// - EventSender: POSTs batches of events as a single JSON array

pub mod config;
pub mod error;
pub mod sender;

pub use config::{EventsConfig, DEFAULT_BATCH_LIMIT};
pub use error::EventError;
pub use sender::{DeliveryStatus, Event, EventSender};
