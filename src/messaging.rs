//! High-level messaging module
//!
//! This module provides user-facing send coordination: validate composed
//! text, submit it through the gateway, and merge the server-echoed message
//! through the same path the poll driver uses, so both delivery routes
//! produce a single consistent state.

use crate::cache::SharedCache;
use crate::gateway::Gateway;
use crate::projector::{self, RenderHandler};
use crate::Result;
use tracing::{debug, info};

/// Submit a user-composed message to a chat
///
/// Empty and whitespace-only submissions are silently ignored, not errored.
/// On acknowledgement the echoed message is merged into the cache; when the
/// merge changed the cache and the chat is the active one, the render
/// handler is invoked with the refreshed state.
///
/// # Arguments
/// * `gateway` - The gateway used to reach the remote service
/// * `cache` - Shared cache the echoed message is merged into
/// * `render` - Render handler notified on visible changes
/// * `chat_id` - Target chat
/// * `user_id` - Sending user
/// * `text` - Composed body text
///
/// # Returns
/// * `Ok(true)` - Message sent and merged
/// * `Ok(false)` - Submission ignored (empty text)
/// * `Err(Error)` - Transport failure; no cache state was mutated
///
/// # Example
/// ```rust,no_run
/// use parley::cache::ChatCache;
/// use parley::gateway::Gateway;
/// use parley::messaging::submit;
///
/// # async fn example() -> parley::Result<()> {
/// let gateway = Gateway::new("http://localhost:5000")?;
/// let cache = ChatCache::shared();
///
/// let sent = submit(&gateway, &cache, None, 1, 42, "hello").await?;
/// if sent {
///     println!("Message delivered");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn submit(
    gateway: &Gateway,
    cache: &SharedCache,
    render: Option<&RenderHandler>,
    chat_id: i64,
    user_id: i64,
    text: &str,
) -> Result<bool> {
    if text.trim().is_empty() {
        debug!("Ignoring empty submission for chat {}", chat_id);
        return Ok(false);
    }

    let message = gateway.send_message(chat_id, user_id, text).await?;
    info!(
        "Message {} acknowledged for chat {}",
        message.message_id, chat_id
    );

    let mut cache = cache.lock().await;
    let changed = cache.merge_message(message);
    if changed && cache.active_chat() == Some(chat_id) {
        projector::notify(render, &cache);
    }

    Ok(true)
}
