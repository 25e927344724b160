// Shared fixtures and wait utilities for the test modules

use crate::cache::SharedCache;
use crate::projector::RenderHandler;
use crate::protocol::{Chat, Message, User};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::time::{sleep, Duration};

pub fn user(user_id: i64, user_name: &str) -> User {
    User {
        user_id,
        user_name: user_name.to_string(),
    }
}

pub fn chat(chat_id: i64, chat_name: &str, users: Vec<User>) -> Chat {
    Chat {
        chat_id,
        chat_name: chat_name.to_string(),
        users,
        messages: Vec::new(),
    }
}

pub fn message(message_id: i64, chat_id: i64, sender: &User, text: &str, timestamp: i64) -> Message {
    Message {
        message_id,
        chat_id,
        user: sender.clone(),
        message_text: text.to_string(),
        timestamp,
    }
}

// A render handler that only counts invocations.
pub fn counting_render() -> (RenderHandler, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let handler: RenderHandler = Arc::new(move |_active, _chats, _messages| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (handler, count)
}

// Wait until a chat's cached history reaches the given length.
pub async fn wait_for_chat_len(cache: &SharedCache, chat_id: i64, count: usize) -> bool {
    for _ in 0..150 {
        {
            let cache = cache.lock().await;
            let len = cache
                .get_chat(chat_id)
                .map(|c| c.messages.len())
                .unwrap_or(0);
            if len >= count {
                return true;
            }
        }
        sleep(Duration::from_millis(20)).await;
    }
    false
}

// Wait until an atomic counter reaches the given value.
pub async fn wait_for_count(counter: &AtomicUsize, count: usize) -> bool {
    for _ in 0..150 {
        if counter.load(Ordering::SeqCst) >= count {
            return true;
        }
        sleep(Duration::from_millis(20)).await;
    }
    false
}
