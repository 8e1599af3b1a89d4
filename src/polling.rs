//! Polling-based freshness. There is no push channel; open views re-fetch on
//! a fixed timer and replace their state wholesale. A subscription is the
//! cancellable unit: dropping the handle tears the loop down, which is the
//! view-unmount cleanup.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::message::Message;
use crate::services::message_service::MessageService;

/// Handle owning a polling loop. Unsubscribing (or dropping) stops the timer;
/// a fetch already in flight is not aborted, its result is discarded.
pub struct SubscriptionHandle {
    task: JoinHandle<()>,
    active: Arc<AtomicBool>,
}

impl SubscriptionHandle {
    pub fn unsubscribe(self) {
        // Drop does the work.
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        self.task.abort();
    }
}

/// Runs `fetch` every `interval` and hands each successful result to
/// `on_update`. Ticks fire independently of in-flight fetches: a slow
/// response never delays the next tick, so duplicate in-flight fetches for
/// the same resource are possible and accepted. Fetch errors are logged and
/// the loop keeps going; nothing is retried out of band.
pub fn subscribe<F, Fut, T, U>(interval: Duration, fetch: F, on_update: U) -> SubscriptionHandle
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
    U: Fn(T) + Send + Sync + 'static,
{
    let fetch = Arc::new(fetch);
    let on_update = Arc::new(on_update);
    let active = Arc::new(AtomicBool::new(true));

    let loop_active = Arc::clone(&active);
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let fetch = Arc::clone(&fetch);
            let on_update = Arc::clone(&on_update);
            let active = Arc::clone(&loop_active);
            tokio::spawn(async move {
                match fetch().await {
                    Ok(value) if active.load(Ordering::SeqCst) => on_update(value),
                    Ok(_) => debug!("Discarding poll result after unsubscribe"),
                    Err(e) => warn!(error = %e, "Poll fetch failed"),
                }
            });
        }
    });

    SubscriptionHandle { task, active }
}

/// Keeps an open two-party conversation fresh: every tick re-fetches the full
/// message list for (self, other party) and, when any messages exist, marks
/// the room read before delivering the list. Each delivery replaces the
/// previous list; there is no merge or dedup.
pub fn watch_conversation<U>(
    chat: MessageService,
    other_user_email: String,
    interval: Duration,
    on_messages: U,
) -> SubscriptionHandle
where
    U: Fn(Vec<Message>) + Send + Sync + 'static,
{
    subscribe(
        interval,
        move || {
            let chat = chat.clone();
            let email = other_user_email.clone();
            async move {
                let messages = chat.conversation(&email).await?;
                if let Some(first) = messages.first() {
                    chat.mark_read(&first.chat_room_id).await?;
                }
                Ok(messages)
            }
        },
        on_messages,
    )
}
