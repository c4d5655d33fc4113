use std::time::Duration;

use super::ProducerError;
use crate::models::LibraryEvent;

/// Broker-confirmed placement of a published record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDelivery {
    /// The partition the broker assigned the record to.
    pub partition: i32,
    /// The offset of the record within that partition.
    pub offset: i64,
}

/// A trait representing a publisher that can submit library events to a
/// partitioned event stream.
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Submit an event without waiting for broker acknowledgement.
    ///
    /// Returns once the record has been handed to the stream client. The
    /// delivery outcome is reconciled on a separate completion task and
    /// reported through the logging channel only; a delivery failure is
    /// terminal for the attempt and is never surfaced to the caller.
    async fn publish(&self, event: &LibraryEvent) -> Result<(), ProducerError>;

    /// Submit an event and block until the broker acknowledges it, up to a
    /// fixed timeout. Returns the confirmed partition and offset.
    async fn publish_sync(&self, event: &LibraryEvent) -> Result<RecordDelivery, ProducerError>;

    /// Flush any buffered records, waiting up to the specified timeout for
    /// completion.
    async fn flush(&self, timeout: Duration) -> Result<(), ProducerError>;
}
