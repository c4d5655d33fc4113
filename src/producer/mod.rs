//! Kafka publishing path for library events.

mod error;
mod kafka;
mod traits;

pub use error::ProducerError;
pub use kafka::KafkaEventPublisher;
pub use traits::{EventPublisher, RecordDelivery};
