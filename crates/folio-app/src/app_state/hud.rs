//! HUD blink timer.
//!
//! The landing page's two status overlays fade in and out on a fixed
//! interval. The timer is a scoped resource: the tokio task is owned by
//! `HudTimer` and aborted on drop, so no flips can fire after the owner
//! releases it and nothing leaks across restarts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

/// Owns the blink task. Dropping the timer cancels it.
pub struct HudTimer {
    visible: Arc<AtomicBool>,
    handle: tokio::task::JoinHandle<()>,
}

impl HudTimer {
    /// Start the blink task on the given runtime.
    ///
    /// The visibility flag starts `true`. Once per `period` the task
    /// inverts it and sends the new value; the first flip happens one
    /// full period after start, not immediately.
    pub fn start(
        runtime: &tokio::runtime::Handle,
        period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<bool>) {
        let visible = Arc::new(AtomicBool::new(true));
        let (tx, rx) = mpsc::unbounded_channel();

        let flag = Arc::clone(&visible);
        let handle = runtime.spawn(async move {
            let first_tick = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(first_tick, period);
            loop {
                interval.tick().await;
                let next = !flag.load(Ordering::Relaxed);
                flag.store(next, Ordering::Relaxed);
                debug!(visible = next, "HUD blink");
                if tx.send(next).is_err() {
                    // Receiver gone; the app is shutting down.
                    break;
                }
            }
        });

        (Self { visible, handle }, rx)
    }

    /// Current visibility flag.
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }
}

impl Drop for HudTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// =============================================================================
// TESTS
// =============================================================================
