//! Chat cache module
//!
//! This module holds the locally known chats and, per chat, the accumulated
//! message history:
//! - Idempotent, order-preserving merge operations
//! - The active-chat pointer
//! - Read accessors for projection
//!
//! The cache is explicitly owned: components receive a shared handle instead
//! of reaching for process-wide state, so the merge logic is testable in
//! isolation.

use crate::protocol::{Chat, Message};
use crate::{Error, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Shared handle to a [`ChatCache`]
///
/// The poll driver and any in-flight send are multiplexed onto the same
/// runtime; the mutex serializes their merges.
pub type SharedCache = Arc<Mutex<ChatCache>>;

/// Local cache of chats and the active-chat pointer
#[derive(Debug, Default)]
pub struct ChatCache {
    /// Known chats, in first-observed order
    chats: Vec<Chat>,
    /// Identifier of the chat currently selected for display
    active_chat: Option<i64>,
}

impl ChatCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            chats: Vec::new(),
            active_chat: None,
        }
    }

    /// Wrap a new empty cache in a shared handle
    pub fn shared() -> SharedCache {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Merge a chat-list snapshot into the cache
    ///
    /// Unseen chats are inserted in their response order. For chats already
    /// known, metadata (name, members) is last-write-wins, but the locally
    /// accumulated message history is never regressed: messages held locally
    /// are kept, and snapshot messages unseen by identifier are appended in
    /// their snapshot order.
    pub fn merge_chats(&mut self, chats: Vec<Chat>) {
        for incoming in chats {
            match self.chats.iter_mut().find(|c| c.chat_id == incoming.chat_id) {
                Some(known) => {
                    known.chat_name = incoming.chat_name;
                    known.users = incoming.users;
                    let seen: HashSet<i64> =
                        known.messages.iter().map(|m| m.message_id).collect();
                    for message in incoming.messages {
                        if !seen.contains(&message.message_id) {
                            known.messages.push(message);
                        }
                    }
                }
                None => {
                    debug!("Caching new chat {}", incoming.chat_id);
                    self.chats.push(incoming);
                }
            }
        }
    }

    /// Merge a single message into its owning chat
    ///
    /// Returns true when the cache changed. Re-observing an identifier that
    /// is already present is a no-op; this is the sole guard against the
    /// send path and the poll path delivering the same message twice.
    /// A message for a chat that has never appeared in a chat-list snapshot
    /// is dropped.
    pub fn merge_message(&mut self, message: Message) -> bool {
        let chat = match self.chats.iter_mut().find(|c| c.chat_id == message.chat_id) {
            Some(chat) => chat,
            None => {
                warn!(
                    "Dropping message {} for unknown chat {}",
                    message.message_id, message.chat_id
                );
                return false;
            }
        };

        if chat.messages.iter().any(|m| m.message_id == message.message_id) {
            debug!("Message {} already cached, skipping", message.message_id);
            return false;
        }

        chat.messages.push(message);
        true
    }

    /// Messages of the active chat, empty when none is selected
    pub fn active_messages(&self) -> &[Message] {
        self.active_chat
            .and_then(|id| self.get_chat(id))
            .map(|chat| chat.messages.as_slice())
            .unwrap_or(&[])
    }

    /// Point the active-chat pointer at a cached chat
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when the chat is not in the cache.
    pub fn set_active_chat(&mut self, chat_id: i64) -> Result<()> {
        if self.get_chat(chat_id).is_none() {
            return Err(Error::NotFound(format!("Chat {} is not cached", chat_id)));
        }
        self.active_chat = Some(chat_id);
        Ok(())
    }

    /// Identifier of the active chat, if any
    pub fn active_chat(&self) -> Option<i64> {
        self.active_chat
    }

    /// All cached chats in first-observed order
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    /// Look up a chat by identifier
    pub fn get_chat(&self, chat_id: i64) -> Option<&Chat> {
        self.chats.iter().find(|c| c.chat_id == chat_id)
    }
}
