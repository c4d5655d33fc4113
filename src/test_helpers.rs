//! Test helpers shared between unit and integration tests.

use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use crate::{
    models::LibraryEvent,
    producer::{EventPublisher, ProducerError, RecordDelivery},
};

/// An in-memory [`EventPublisher`] that records every submitted event.
///
/// When constructed with [`RecordingEventPublisher::failing_delivery`], each
/// submission is still accepted (mirroring the fire-and-continue contract)
/// but its delivery is reported as failed through the logging channel, with
/// the failure counted for assertions.
#[derive(Default)]
pub struct RecordingEventPublisher {
    published: Mutex<Vec<LibraryEvent>>,
    fail_delivery: bool,
    delivery_failures: AtomicUsize,
}

impl RecordingEventPublisher {
    /// Creates a publisher whose deliveries all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher that accepts submissions but fails every delivery.
    pub fn failing_delivery() -> Self {
        Self { fail_delivery: true, ..Self::default() }
    }

    /// Returns the events submitted so far, in submission order.
    pub fn published(&self) -> Vec<LibraryEvent> {
        self.published.lock().unwrap().clone()
    }

    /// Returns how many deliveries were reported as failed.
    pub fn delivery_failures(&self) -> usize {
        self.delivery_failures.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish(&self, event: &LibraryEvent) -> Result<(), ProducerError> {
        self.published.lock().unwrap().push(event.clone());

        if self.fail_delivery {
            self.delivery_failures.fetch_add(1, Ordering::SeqCst);
            tracing::error!(
                key = ?event.library_event_id,
                error = "broker unreachable (injected)",
                "Failed to deliver event"
            );
        }

        Ok(())
    }

    async fn publish_sync(&self, event: &LibraryEvent) -> Result<RecordDelivery, ProducerError> {
        if self.fail_delivery {
            return Err(ProducerError::AckTimeout(Duration::from_secs(1)));
        }

        let mut published = self.published.lock().unwrap();
        published.push(event.clone());
        Ok(RecordDelivery { partition: 0, offset: published.len() as i64 - 1 })
    }

    async fn flush(&self, _timeout: Duration) -> Result<(), ProducerError> {
        Ok(())
    }
}
