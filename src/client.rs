// ABOUTME: HTTP chat backend — one POST /api/chat round trip per message.
// ABOUTME: The ChatBackend trait is the seam that lets tests mock the server.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body from the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// A backend that answers one chat message with one reply.
///
/// Any failure — connection error, non-success status, undecodable body —
/// surfaces as a single error; callers do not distinguish between them.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn request_reply(&self, message: &str) -> anyhow::Result<String>;
}

/// HTTP implementation of [`ChatBackend`].
///
/// No timeout is configured: a hung request waits indefinitely and the rest
/// of the UI stays usable.
pub struct ChatClient {
    http: Client,
    chat_url: String,
}

impl ChatClient {
    /// Create a client for the given server base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            chat_url: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }

    /// The full URL messages are posted to.
    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn request_reply(&self, message: &str) -> anyhow::Result<String> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = self.http.post(&self.chat_url).json(&request).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("server returned {}", response.status());
        }

        let parsed: ChatResponse = response.json().await?;
        Ok(parsed.reply)
    }
}
