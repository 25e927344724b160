//! Fetch gateway module
//!
//! This module wraps outbound requests to the remote chat service:
//! - Chat-list and message-list retrieval
//! - Message submission
//! - Long-polling for the next broadcast message
//!
//! The gateway owns no state beyond the HTTP client and the base URL; every
//! failure surfaces as [`Error::Transport`] and retryability is left to the
//! caller.

use crate::protocol::{
    Chat, ChatsResponse, Message, MessagesResponse, SendMessageRequest, SendMessageResponse,
    StreamResponse,
};
use crate::{Error, Result};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Timeout for plain request/response calls in milliseconds
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// HTTP gateway to the remote chat service
#[derive(Debug, Clone)]
pub struct Gateway {
    /// Base URL of the service, without a trailing slash
    base_url: String,
    /// HTTP client shared by all calls
    client: reqwest::Client,
}

impl Gateway {
    /// Create a new gateway for the given base URL
    ///
    /// The client carries no global timeout: the stream endpoint holds
    /// requests open for the long-poll window. Plain calls attach their own
    /// per-request timeout instead.
    ///
    /// # Example
    /// ```rust,no_run
    /// use parley::gateway::Gateway;
    ///
    /// # fn example() -> parley::Result<()> {
    /// let gateway = Gateway::new("http://localhost:5000")?;
    /// # let _ = gateway;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    /// List all chats for a user, each with its current message history
    pub async fn list_chats(&self, user_id: i64) -> Result<Vec<Chat>> {
        let url = format!("{}/chats?user_id={}", self.base_url, user_id);
        debug!("Fetching chat list for user {}", user_id);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Chat list request failed: {}", e)))?;

        if !response.status().is_success() {
            warn!("Chat list request failed with status {}", response.status());
            return Err(Error::Transport(format!(
                "Chat list request failed with status {}",
                response.status()
            )));
        }

        let body: ChatsResponse = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to decode chat list: {}", e)))?;
        Ok(body.chats)
    }

    /// List the messages of one chat
    pub async fn list_messages(&self, user_id: i64, chat_id: i64) -> Result<Vec<Message>> {
        let url = format!(
            "{}/messages?user_id={}&chat_id={}",
            self.base_url, user_id, chat_id
        );
        debug!("Fetching messages for chat {}", chat_id);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Message list request failed: {}", e)))?;

        if !response.status().is_success() {
            warn!(
                "Message list request failed with status {}",
                response.status()
            );
            return Err(Error::Transport(format!(
                "Message list request failed with status {}",
                response.status()
            )));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to decode message list: {}", e)))?;
        Ok(body.messages)
    }

    /// Submit a composed message and return the persisted message as echoed
    /// by the server, with identifier and timestamp assigned
    pub async fn send_message(&self, chat_id: i64, user_id: i64, text: &str) -> Result<Message> {
        let url = format!("{}/messages", self.base_url);
        info!("Sending message to chat {}", chat_id);

        let request = SendMessageRequest {
            chat_id,
            user_id,
            message_text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Message send failed: {}", e)))?;

        if !response.status().is_success() {
            warn!("Message send failed with status {}", response.status());
            return Err(Error::Transport(format!(
                "Message send failed with status {}",
                response.status()
            )));
        }

        let body: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to decode send response: {}", e)))?;
        Ok(body.message)
    }

    /// Wait for the next broadcast message for a user
    ///
    /// Suspends until the server delivers a message, the window elapses, or
    /// the transport fails. A timeout is a normal empty result, never an
    /// error; only genuine transport failures surface as `Err`.
    pub async fn poll_next(&self, user_id: i64, timeout_ms: u64) -> Result<Option<Message>> {
        let url = format!("{}/message-stream?user_id={}", self.base_url, user_id);

        let result = self
            .client
            .get(&url)
            .timeout(Duration::from_millis(timeout_ms))
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                debug!("Stream poll for user {} timed out after {}ms", user_id, timeout_ms);
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::Transport(format!("Stream request failed: {}", e)));
            }
        };

        if !response.status().is_success() {
            return Err(Error::Transport(format!(
                "Stream request failed with status {}",
                response.status()
            )));
        }

        let body: StreamResponse = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to decode stream response: {}", e)))?;
        Ok(body.message)
    }
}
