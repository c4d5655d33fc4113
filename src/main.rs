use std::{sync::Arc, time::Duration};

use library_events_producer::{
    config::AppConfig,
    http_server,
    producer::{EventPublisher, KafkaEventPublisher},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    tracing::debug!("Loading application configuration...");
    let config = Arc::new(AppConfig::new(None)?);
    tracing::debug!(
        listen_address = %config.server.listen_address,
        brokers = %config.kafka.brokers,
        topic = %config.kafka.topic,
        "Configuration loaded."
    );

    let publisher = Arc::new(KafkaEventPublisher::from_config(&config.kafka)?);
    tracing::info!(brokers = %config.kafka.brokers, topic = %config.kafka.topic, "Kafka producer initialized.");

    http_server::run_server_from_config(
        Arc::clone(&config),
        Arc::clone(&publisher) as Arc<dyn EventPublisher>,
    )
    .await;

    // Drain records still in flight before the process exits.
    publisher.flush(Duration::from_secs(5)).await?;
    tracing::info!("Producer flushed, shutting down.");

    Ok(())
}
