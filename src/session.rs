//! Session orchestration module
//!
//! Ties the gateway, the cache, the render seam and the poll driver into a
//! single lifecycle: initial chat-list load, default active-chat selection,
//! driver spawn, on-demand sends and deterministic shutdown.

use crate::cache::{ChatCache, SharedCache};
use crate::gateway::Gateway;
use crate::projector::{self, RenderHandler};
use crate::{messaging, poller, Result};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// A live synchronization session for one user
///
/// # Example
/// ```rust,no_run
/// use parley::gateway::Gateway;
/// use parley::session::Session;
///
/// # async fn example() -> parley::Result<()> {
/// let gateway = Gateway::new("http://localhost:5000")?;
/// let mut session = Session::new(gateway, 42);
///
/// session.start().await?;
/// session.submit(1, "hello").await?;
/// session.shutdown().await;
/// # Ok(())
/// # }
/// ```
pub struct Session {
    gateway: Gateway,
    cache: SharedCache,
    render: Option<RenderHandler>,
    user_id: i64,
    poll_timeout_ms: u64,
    cancel: CancellationToken,
    driver: Option<JoinHandle<()>>,
}

impl Session {
    /// Create a session for a user
    pub fn new(gateway: Gateway, user_id: i64) -> Self {
        Self {
            gateway,
            cache: ChatCache::shared(),
            render: None,
            user_id,
            poll_timeout_ms: poller::POLL_TIMEOUT_MS,
            cancel: CancellationToken::new(),
            driver: None,
        }
    }

    /// Override the long-poll window
    pub fn with_poll_timeout(mut self, timeout_ms: u64) -> Self {
        self.poll_timeout_ms = timeout_ms;
        self
    }

    /// Install the render handler invoked on visible changes
    ///
    /// Must be set before [`Session::start`] for the driver to pick it up.
    pub fn set_render_handler(&mut self, handler: RenderHandler) {
        self.render = Some(handler);
    }

    /// Shared handle to the session's cache
    pub fn cache(&self) -> SharedCache {
        self.cache.clone()
    }

    /// Load the initial chat list and start the poll driver
    ///
    /// Merges the chat-list snapshot, defaults the active chat to the first
    /// returned chat when none is set, notifies the projector once, then
    /// spawns the driver.
    ///
    /// # Errors
    /// Returns [`crate::Error::Transport`] when the initial load fails; the
    /// driver is not started in that case.
    pub async fn start(&mut self) -> Result<()> {
        let chats = self.gateway.list_chats(self.user_id).await?;
        info!("Loaded {} chats for user {}", chats.len(), self.user_id);

        {
            let mut cache = self.cache.lock().await;
            cache.merge_chats(chats);
            if cache.active_chat().is_none() {
                if let Some(first) = cache.chats().first() {
                    let chat_id = first.chat_id;
                    cache.set_active_chat(chat_id)?;
                }
            }
            projector::notify(self.render.as_ref(), &cache);
        }

        let handle = tokio::spawn(poller::run(
            self.gateway.clone(),
            self.cache.clone(),
            self.render.clone(),
            self.user_id,
            self.poll_timeout_ms,
            self.cancel.clone(),
        ));
        self.driver = Some(handle);
        Ok(())
    }

    /// Switch the active chat and refresh its history
    ///
    /// The chat must already be cached. Its history is re-fetched and merged
    /// (never regressing locally held messages), then the projector is
    /// notified: the visible conversation changed even when no new messages
    /// arrived.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotFound`] for an unknown chat, or
    /// [`crate::Error::Transport`] when the refresh fails after switching.
    pub async fn select_chat(&self, chat_id: i64) -> Result<()> {
        {
            let mut cache = self.cache.lock().await;
            cache.set_active_chat(chat_id)?;
        }

        let messages = self.gateway.list_messages(self.user_id, chat_id).await?;

        let mut cache = self.cache.lock().await;
        for message in messages {
            cache.merge_message(message);
        }
        projector::notify(self.render.as_ref(), &cache);
        Ok(())
    }

    /// Submit a composed message to a chat
    ///
    /// See [`messaging::submit`] for the full contract.
    pub async fn submit(&self, chat_id: i64, text: &str) -> Result<bool> {
        messaging::submit(
            &self.gateway,
            &self.cache,
            self.render.as_ref(),
            chat_id,
            self.user_id,
            text,
        )
        .await
    }

    /// Stop the poll driver and wait for it to exit
    pub async fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.driver.take() {
            if let Err(e) = handle.await {
                warn!("Poll driver task ended abnormally: {}", e);
            }
        }
    }
}
