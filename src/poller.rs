//! Long-poll driver module
//!
//! A perpetual loop that awaits the next broadcast message, feeds it into
//! the cache and immediately re-issues the poll. Timeouts and transport
//! failures are both treated as empty polls; the loop only exits when its
//! cancellation token fires, so tests and shutdown paths can terminate it
//! deterministically.

use crate::cache::SharedCache;
use crate::gateway::Gateway;
use crate::projector::{self, RenderHandler};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default long-poll window in milliseconds
pub const POLL_TIMEOUT_MS: u64 = 30_000;

/// Drive the long-poll loop until the token is cancelled
///
/// Each iteration issues one poll. A delivered message is merged into the
/// cache; when the merge changed the cache and the message belongs to the
/// active chat, the render handler is invoked with the refreshed state.
/// Empty polls restart the loop with no observable state change. Transport
/// failures are logged and likewise restart the loop: availability of
/// future updates takes priority over surfacing the failure. There is no
/// backoff; the poll window itself throttles the request rate.
pub async fn run(
    gateway: Gateway,
    cache: SharedCache,
    render: Option<RenderHandler>,
    user_id: i64,
    timeout_ms: u64,
    cancel: CancellationToken,
) {
    info!("Starting long-poll driver for user {}", user_id);

    loop {
        let polled = tokio::select! {
            () = cancel.cancelled() => {
                info!("Long-poll driver for user {} stopped", user_id);
                return;
            }
            polled = gateway.poll_next(user_id, timeout_ms) => polled,
        };

        match polled {
            Ok(Some(message)) => {
                debug!(
                    "Received message {} for chat {}",
                    message.message_id, message.chat_id
                );
                let chat_id = message.chat_id;
                let mut cache = cache.lock().await;
                let changed = cache.merge_message(message);
                if changed && cache.active_chat() == Some(chat_id) {
                    projector::notify(render.as_ref(), &cache);
                }
            }
            Ok(None) => {
                debug!("Poll window for user {} elapsed without a message", user_id);
            }
            Err(e) => {
                warn!("Poll failed for user {}: {}. Retrying.", user_id, e);
            }
        }
    }
}
