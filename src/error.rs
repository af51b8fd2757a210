//! Error types and result handling for sensor-producer.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.
//!
//! # Example
//!
//! ```rust
//! use sensor_producer::{Error, Result};
//!
//! fn start() -> Result<()> {
//!     Err(Error::NotConnected)
//! }
//!
//! match start() {
//!     Ok(()) => println!("Running"),
//!     Err(Error::NotConnected) => eprintln!("connect first"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use rdkafka::error::KafkaError;
use thiserror::Error;

/// The main error type for sensor-producer operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// The Kafka client could not be built from the given settings.
    ///
    /// This happens before any network traffic and usually points at an
    /// invalid client property.
    #[error("Failed to construct Kafka client: {0}")]
    ClientConstruction(#[source] KafkaError),

    /// The bootstrap brokers did not answer the startup metadata probe.
    #[error("Could not reach Kafka brokers at {brokers}: {source}")]
    Connection {
        /// Bootstrap endpoint that was probed
        brokers: String,
        #[source]
        source: KafkaError,
    },

    /// Kafka client or producer error during steady state.
    #[error("Kafka error: {0}")]
    Kafka(#[from] KafkaError),

    /// JSON serialization error when encoding readings.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV encoding error when writing customer records.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error, typically from writing the customer file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking Kafka call panicked or was cancelled on the blocking pool.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The producer loop was started without a connection.
    #[error("Producer is not connected")]
    NotConnected,
}

/// A convenient Result type alias for sensor-producer operations.
pub type Result<T> = std::result::Result<T, Error>;
