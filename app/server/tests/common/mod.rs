//! FILENAME: tests/common/mod.rs
//! Test harness for calculation service integration tests.

#![allow(dead_code)]

use calc_service::{serve_with_shutdown, ServerConfig};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A running server on an ephemeral port plus an HTTP client.
pub struct TestHarness {
    pub base_url: String,
    pub route: String,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestHarness {
    /// Start a server with the default configuration.
    pub async fn start() -> Self {
        Self::with_config(ServerConfig::default()).await
    }

    /// Start a server with `config`; the address is replaced by 127.0.0.1:0.
    pub async fn with_config(mut config: ServerConfig) -> Self {
        config.addr = ([127, 0, 0, 1], 0).into();
        let listener = TcpListener::bind(config.addr).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let route = config.route.clone();

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let signal = async move {
                let _ = rx.await;
            };
            serve_with_shutdown(listener, config, signal).await.unwrap();
        });

        TestHarness {
            base_url: format!("http://{}", addr),
            route,
            client: reqwest::Client::new(),
            shutdown: Some(tx),
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.route)
    }

    /// POST `{"expression": ...}` and return status plus decoded JSON body.
    pub async fn calculate(&self, expression: &str) -> (u16, Value) {
        let response = self
            .client
            .post(self.url())
            .json(&json!({ "expression": expression }))
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    /// POST a raw body without a Content-Type header.
    pub async fn post_raw(&self, body: &'static str) -> (u16, String) {
        let response = self.client.post(self.url()).body(body).send().await.unwrap();
        let status = response.status().as_u16();
        (status, response.text().await.unwrap())
    }

    pub async fn get(&self) -> u16 {
        self.client.get(self.url()).send().await.unwrap().status().as_u16()
    }
}

impl Drop for TestHarness {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
