//! Wire protocol module
//!
//! This module defines the JSON payloads exchanged with the remote chat
//! service:
//! - Core data types (User, Chat, Message)
//! - Response envelopes for the chat-list, message-list and stream endpoints
//! - The send-message request/response pair
//!
//! Field names match the wire format exactly; serde does the rest.

use serde::{Deserialize, Serialize};

/// A user participating in one or more chats
///
/// Read-only reference data, embedded in chats and messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier
    pub user_id: i64,
    /// Display name
    pub user_name: String,
}

/// One authored entry in a chat, immutable once created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique message identifier, assigned by the server
    pub message_id: i64,
    /// Identifier of the owning chat
    pub chat_id: i64,
    /// Sender
    pub user: User,
    /// Body text
    pub message_text: String,
    /// Creation timestamp in Unix milliseconds, assigned by the server
    pub timestamp: i64,
}

/// A conversation between a set of users with an ordered message history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chat {
    /// Unique chat identifier
    pub chat_id: i64,
    /// Chat title as computed by the server for the requesting user
    pub chat_name: String,
    /// Member users
    pub users: Vec<User>,
    /// Message history, ordered by arrival
    pub messages: Vec<Message>,
}

/// Response payload of `GET /chats`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatsResponse {
    /// Chats the requesting user participates in
    pub chats: Vec<Chat>,
}

/// Response payload of `GET /messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesResponse {
    /// Messages of the requested chat
    pub messages: Vec<Message>,
}

/// Response payload of `GET /message-stream`
///
/// The server holds the request open until a message is available or its
/// own window elapses; an empty window is an explicit `null`, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamResponse {
    /// The next broadcast message, if one arrived within the window
    pub message: Option<Message>,
}

/// Request payload of `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendMessageRequest {
    /// Target chat
    pub chat_id: i64,
    /// Sending user
    pub user_id: i64,
    /// Composed body text
    pub message_text: String,
}

/// Response payload of `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendMessageResponse {
    /// The persisted message as echoed by the server, with identifier and
    /// timestamp assigned
    pub message: Message,
}
