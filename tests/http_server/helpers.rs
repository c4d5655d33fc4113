use std::{net::SocketAddr, sync::Arc};

use library_events_producer::{
    config::AppConfig, http_server, producer::EventPublisher,
    test_helpers::RecordingEventPublisher,
};
use reqwest::Client;
use tokio::task;

pub struct TestServer {
    pub address: SocketAddr,
    pub server_handle: task::JoinHandle<()>,
    pub client: Client,
}

impl TestServer {
    pub async fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");
        drop(listener); // Release port for the app to use

        let mut config = AppConfig::default();
        config.server.listen_address = addr.to_string();
        let config = Arc::new(config);

        // Spawn the actual app server
        let server_handle = task::spawn(async move {
            http_server::run_server_from_config(config, publisher).await;
        });

        // Wait for server to start
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;

        Self { address: addr, server_handle, client: Client::new() }
    }

    /// Spawns a server backed by a recording publisher and returns both.
    pub async fn new_with_recording_publisher() -> (Self, Arc<RecordingEventPublisher>) {
        let publisher = Arc::new(RecordingEventPublisher::new());
        let server = Self::new(publisher.clone() as Arc<dyn EventPublisher>).await;
        (server, publisher)
    }

    /// Spawns a server whose publisher accepts submissions but fails every
    /// delivery asynchronously.
    pub async fn new_with_failing_deliveries() -> (Self, Arc<RecordingEventPublisher>) {
        let publisher = Arc::new(RecordingEventPublisher::failing_delivery());
        let server = Self::new(publisher.clone() as Arc<dyn EventPublisher>).await;
        (server, publisher)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        let url = format!("http://{}{}", self.address, path);
        self.client.get(&url).send().await.expect("Request failed")
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("http://{}{}", self.address, path);
        self.client.post(&url)
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("http://{}{}", self.address, path);
        self.client.put(&url)
    }

    pub fn cleanup(self) {
        self.server_handle.abort();
    }
}

pub fn sample_book() -> serde_json::Value {
    serde_json::json!({
        "bookId": 456,
        "bookName": "Kafka using springboot",
        "bookAuthor": "Thompson"
    })
}
