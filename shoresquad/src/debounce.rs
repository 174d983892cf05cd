//! Delays a value until input has been quiet for a while.

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{sleep, Duration},
};

/// Forwards only the last value received within `delay` of the previous one.
///
/// Every [`call`](Debouncer::call) cancels the pending timer and starts a new
/// one; when a timer runs out its value is sent on the channel.
#[derive(Debug)]
pub struct Debouncer<T> {
    sender: mpsc::Sender<T>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}
impl<T: Send + 'static> Debouncer<T> {
    pub fn new(sender: mpsc::Sender<T>, delay: Duration) -> Self {
        Self {
            sender,
            delay,
            pending: None,
        }
    }

    pub fn call(&mut self, value: T) {
        self.cancel();
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            // no timers without a runtime, deliver right away
            if let Err(e) = self.sender.try_send(value) {
                tracing::warn!(error = %e, "Dropped debounced value");
            }
            return;
        };
        let sender = self.sender.clone();
        let delay = self.delay;
        self.pending = Some(handle.spawn(async move {
            sleep(delay).await;
            if sender.send(value).await.is_err() {
                tracing::debug!("Debounce receiver closed");
            }
        }));
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.is_finished())
    }
}
impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
