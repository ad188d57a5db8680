// WebSocket client utilities for testing

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub const RECV_TIMEOUT: Duration = Duration::from_secs(2);

type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

/// WebSocket test client
pub struct WebSocketClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketClient {
    /// Connect to a WebSocket endpoint, retrying until success or timeout.
    pub async fn connect_retry(url: &str, timeout: Duration) -> TestResult<Self> {
        let start = tokio::time::Instant::now();
        loop {
            match connect_async(url).await {
                Ok((stream, _)) => return Ok(Self { stream }),
                Err(err) => {
                    if start.elapsed() >= timeout {
                        return Err(Box::new(err));
                    }
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
        }
    }

    /// Receive the next message with a timeout
    pub async fn recv_timeout(&mut self, timeout: Duration) -> TestResult<Option<Message>> {
        tokio::time::timeout(timeout, self.stream.next())
            .await
            .map_err(|_| "Timeout waiting for message")?
            .transpose()
            .map_err(|e| e.into())
    }

    /// Send a JSON value as a text frame
    pub async fn send_json(&mut self, value: &Value) -> TestResult<()> {
        self.send_text(&value.to_string()).await
    }

    pub async fn send_text(&mut self, text: &str) -> TestResult<()> {
        self.stream.send(Message::text(text.to_string())).await?;
        Ok(())
    }

    /// Close the connection
    pub async fn close(&mut self) -> TestResult<()> {
        self.stream.close(None).await?;
        Ok(())
    }

    /// Next text frame as JSON; `None` once the server closes.
    ///
    /// Control frames are skipped.
    pub async fn recv_json(&mut self) -> TestResult<Option<Value>> {
        loop {
            match self.recv_timeout(RECV_TIMEOUT).await? {
                Some(Message::Text(text)) => {
                    let json: Value = serde_json::from_str(text.as_str())?;
                    return Ok(Some(json));
                }
                Some(Message::Ping(_)) | Some(Message::Pong(_)) => continue,
                Some(Message::Close(_)) | None => return Ok(None),
                Some(other) => return Err(format!("unexpected frame {other:?}").into()),
            }
        }
    }

    /// Skip frames until one with the given `type` arrives.
    pub async fn recv_type(&mut self, kind: &str) -> TestResult<Value> {
        loop {
            match self.recv_json().await? {
                Some(json) if json["type"] == kind => return Ok(json),
                Some(_) => continue,
                None => return Err(format!("connection closed before {kind:?}").into()),
            }
        }
    }

    /// Wait for a `game_state` at or past `version`.
    pub async fn recv_state_at(&mut self, version: u64) -> TestResult<Value> {
        loop {
            let state = self.recv_type("game_state").await?;
            if state["version"].as_u64().unwrap_or_default() >= version {
                return Ok(state);
            }
        }
    }

    pub async fn hello(&mut self) -> TestResult<Value> {
        self.send_json(&json!({"type": "hello", "protocol": 1})).await?;
        self.recv_type("hello_ack").await
    }

    pub async fn start_round(&mut self) -> TestResult<()> {
        self.send_json(&json!({"type": "start_round"})).await
    }

    pub async fn submit(&mut self, cards: &[&str]) -> TestResult<()> {
        self.send_json(&json!({"type": "submit_cards", "cards": cards}))
            .await
    }

    pub async fn pass(&mut self) -> TestResult<()> {
        self.send_json(&json!({"type": "pass"})).await
    }
}
