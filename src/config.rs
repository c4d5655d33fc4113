//! Configuration module for the library events producer.

use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Application configuration, loaded from `config.yaml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Kafka producer configuration.
    #[serde(default)]
    pub kafka: KafkaConfig,
}

/// Configuration for the HTTP server.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { listen_address: default_listen_address() }
    }
}

/// Configuration for the Kafka event publisher.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KafkaConfig {
    /// Comma-separated list of Kafka broker addresses.
    #[serde(default = "default_brokers")]
    pub brokers: String,

    /// The Kafka topic library events are published to.
    #[serde(default = "default_topic")]
    pub topic: String,

    /// Value of the `event-source` provenance header attached to every
    /// published record.
    #[serde(default = "default_event_source")]
    pub event_source: String,

    /// Producer-specific configuration properties.
    #[serde(default)]
    pub producer: KafkaProducerConfig,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: default_brokers(),
            topic: default_topic(),
            event_source: default_event_source(),
            producer: KafkaProducerConfig::default(),
        }
    }
}

/// Producer tuning properties passed through to librdkafka.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KafkaProducerConfig {
    /// The maximum time in milliseconds to wait for a message to be sent.
    /// librdkafka property: `message.timeout.ms`
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,

    /// The compression codec to use for compressing message sets.
    /// Common values: none, gzip, snappy, lz4, zstd.
    /// librdkafka property: `compression.codec`
    #[serde(default = "default_compression_codec")]
    pub compression_codec: String,

    /// The number of acknowledgments the producer requires the leader to
    /// have received before considering a request complete.
    /// librdkafka property: `acks`
    #[serde(default = "default_acks")]
    pub acks: String,
}

fn default_listen_address() -> String {
    "0.0.0.0:8080".to_string()
}
fn default_brokers() -> String {
    "127.0.0.1:9092".to_string()
}
fn default_topic() -> String {
    "library-events".to_string()
}
fn default_event_source() -> String {
    "scanner".to_string()
}
fn default_message_timeout_ms() -> u64 {
    5000
}
fn default_compression_codec() -> String {
    "none".to_string()
}
fn default_acks() -> String {
    "all".to_string()
}

impl Default for KafkaProducerConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: default_message_timeout_ms(),
            compression_codec: default_compression_codec(),
            acks: default_acks(),
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration file.
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let s = Config::builder().add_source(File::with_name(path.unwrap_or("config.yaml"))).build()?;
        s.try_deserialize()
    }
}
