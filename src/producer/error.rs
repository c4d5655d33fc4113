//! Error types for the event publishing path.

use std::time::Duration;

/// Error types for the event publishing path.
#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    /// The event could not be serialized into its wire form. Should not
    /// occur for events that passed the gateway's preconditions.
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Kafka error
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// The broker did not acknowledge the record within the allowed time.
    /// Only raised by the synchronous publish path.
    #[error("Timed out after {0:?} waiting for broker acknowledgement")]
    AckTimeout(Duration),

    /// The delivery future was dropped before the outcome was known.
    #[error("Delivery result was canceled before completion")]
    Canceled,
}
