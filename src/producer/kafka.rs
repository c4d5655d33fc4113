use std::time::Duration;

use rdkafka::{
    ClientConfig,
    message::{Header, OwnedHeaders},
    producer::{FutureProducer, FutureRecord, Producer},
};

use crate::{
    config::KafkaConfig,
    models::LibraryEvent,
    producer::{EventPublisher, ProducerError, RecordDelivery},
};

/// Name of the provenance header attached to every published record.
const EVENT_SOURCE_HEADER: &str = "event-source";

/// How long the synchronous publish path waits for broker acknowledgement.
const ACK_TIMEOUT: Duration = Duration::from_secs(1);

/// A Kafka-backed library event publisher.
///
/// Holds a single long-lived `FutureProducer`, which is safe for concurrent
/// submission from many request handlers. Constructed once at startup and
/// shared behind an `Arc`.
pub struct KafkaEventPublisher {
    producer: FutureProducer,
    topic: String,
    event_source: String,
}

impl KafkaEventPublisher {
    /// Creates a new `KafkaEventPublisher` from the given `KafkaConfig`.
    pub fn from_config(config: &KafkaConfig) -> Result<Self, ProducerError> {
        let mut client_config = ClientConfig::new();

        client_config
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", config.producer.message_timeout_ms.to_string())
            .set("compression.codec", &config.producer.compression_codec)
            .set("acks", &config.producer.acks);

        let producer = client_config.create::<FutureProducer>()?;

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            event_source: config.event_source.clone(),
        })
    }

    /// Serializes an event into its record key and value.
    ///
    /// The key is the decimal rendering of `libraryEventId`; events without
    /// an identifier produce a keyless record and carry no per-key ordering
    /// guarantee.
    fn encode(event: &LibraryEvent) -> Result<(Option<String>, String), ProducerError> {
        let key = event.library_event_id.map(|id| id.to_string());
        let value = serde_json::to_string(event)?;
        Ok((key, value))
    }

    fn build_record<'a>(
        &'a self,
        key: &'a Option<String>,
        value: &'a String,
    ) -> FutureRecord<'a, String, String> {
        let headers = OwnedHeaders::new()
            .insert(Header { key: EVENT_SOURCE_HEADER, value: Some(&self.event_source) });

        let mut record: FutureRecord<'a, String, String> =
            FutureRecord::to(&self.topic).payload(value).headers(headers);
        if let Some(key) = key {
            record = record.key(key);
        }
        record
    }
}

#[async_trait::async_trait]
impl EventPublisher for KafkaEventPublisher {
    async fn publish(&self, event: &LibraryEvent) -> Result<(), ProducerError> {
        let (key, value) = Self::encode(event)?;
        let record = self.build_record(&key, &value);

        let delivery = self.producer.send_result(record).map_err(|(e, _)| ProducerError::Kafka(e))?;

        // Reconcile the outcome on a separate task; the submitting handler
        // has already moved on.
        let topic = self.topic.clone();
        tokio::spawn(async move {
            match delivery.await {
                Ok(Ok((partition, offset))) => {
                    tracing::info!(
                        key = ?key,
                        value = %value,
                        %topic,
                        partition,
                        offset,
                        "Event published"
                    );
                }
                Ok(Err((error, _message))) => {
                    tracing::error!(
                        key = ?key,
                        value = %value,
                        %topic,
                        %error,
                        "Failed to deliver event"
                    );
                }
                Err(_) => {
                    tracing::error!(
                        key = ?key,
                        value = %value,
                        %topic,
                        "Delivery result canceled before completion"
                    );
                }
            }
        });

        Ok(())
    }

    async fn publish_sync(&self, event: &LibraryEvent) -> Result<RecordDelivery, ProducerError> {
        let (key, value) = Self::encode(event)?;
        let record = self.build_record(&key, &value);

        let send = self.producer.send(record, Duration::from_secs(0));
        match tokio::time::timeout(ACK_TIMEOUT, send).await {
            Ok(Ok((partition, offset))) => Ok(RecordDelivery { partition, offset }),
            Ok(Err((error, _message))) => Err(ProducerError::Kafka(error)),
            Err(_) => Err(ProducerError::AckTimeout(ACK_TIMEOUT)),
        }
    }

    async fn flush(&self, timeout: Duration) -> Result<(), ProducerError> {
        self.producer.flush(timeout).map_err(|e| e.into())
    }
}
