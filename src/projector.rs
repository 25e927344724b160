//! View projector seam
//!
//! The engine never renders. Whenever a merge produces a visible change it
//! invokes the installed render handler with the active chat identifier, the
//! full chat list (for ordering and unread indicators) and the active
//! conversation's messages. Hosts install whatever projection they need; the
//! handler is expected to be a pure function of the state it receives and is
//! only invoked when that state visibly changed.

use crate::cache::ChatCache;
use crate::protocol::{Chat, Message};
use std::sync::Arc;

/// Callback type invoked when the visible conversation changed
pub type RenderHandler = Arc<dyn Fn(i64, &[Chat], &[Message]) + Send + Sync>;

/// Notify a render handler with the cache's current visible state
///
/// A no-op when no handler is installed or no chat is active.
pub fn notify(handler: Option<&RenderHandler>, cache: &ChatCache) {
    if let Some(handler) = handler {
        if let Some(active) = cache.active_chat() {
            handler(active, cache.chats(), cache.active_messages());
        }
    }
}
