//! Deferred full-page reloads.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

/// Reloads the page hosting the panel, discarding all client state.
pub trait PageReloader: Send + Sync + 'static {
    fn reload(&self);
}

/// Fire `reloader` once after `delay`.
///
/// The task is detached and there is no way to cancel it.
pub fn schedule_reload(reloader: Arc<dyn PageReloader>, delay: Duration) {
    tracing::debug!(delay_ms = delay.as_millis() as u64, "page reload scheduled");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::info!("reloading page");
        reloader.reload();
    });
}

/// Forwards reload requests to whoever owns the page, stamped with the
/// instant the timer fired.
#[derive(Debug, Clone)]
pub struct ChannelReloader {
    tx: mpsc::UnboundedSender<Instant>,
}

impl ChannelReloader {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Instant>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl PageReloader for ChannelReloader {
    fn reload(&self) {
        if self.tx.send(Instant::now()).is_err() {
            tracing::warn!("reload requested but the page owner is gone");
        }
    }
}
