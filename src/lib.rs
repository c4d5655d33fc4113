#![warn(missing_docs)]
//! Library events producer: accepts library catalog change events over HTTP
//! and publishes them onto a partitioned Kafka topic for downstream
//! consumers.

pub mod config;
pub mod http_server;
pub mod models;
pub mod producer;
pub mod test_helpers;
