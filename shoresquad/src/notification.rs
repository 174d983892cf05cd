//! Transient banners that dismiss themselves.
//!
//! There is no queue: every banner shown is on screen at once, stacked in the
//! order it was shown, until its timer removes it.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::{
    sync::mpsc,
    time::{sleep, Duration},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    #[default]
    Info,
}
impl NotificationKind {
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#2ECC71",
            NotificationKind::Info => "#0077BE",
        }
    }
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Default)]
struct Stack {
    next_id: u64,
    active: Vec<Notification>,
    dismissed: Option<mpsc::UnboundedSender<u64>>,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    stack: Arc<Mutex<Stack>>,
    lifetime: Duration,
}
impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            stack: Arc::new(Mutex::new(Stack::default())),
            lifetime,
        }
    }

    /// Puts a banner on screen and schedules its removal.
    ///
    /// Outside a tokio runtime the banner stays until [`dismiss`] is called.
    ///
    /// [`dismiss`]: NotificationCenter::dismiss
    pub fn show(&self, message: &str, kind: NotificationKind) -> Notification {
        let notification = {
            let mut stack = self.lock();
            stack.next_id += 1;
            let n = Notification {
                id: stack.next_id,
                message: String::from(message),
                kind,
            };
            stack.active.push(n.clone());
            n
        };
        tracing::debug!(id = notification.id, kind = kind.class(), text = message, "Notification shown");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let center = self.clone();
                let id = notification.id;
                handle.spawn(async move {
                    sleep(center.lifetime).await;
                    center.dismiss(id);
                });
            }
            Err(_) => {
                tracing::warn!(id = notification.id, "No runtime, notification will not auto-dismiss")
            }
        }
        notification
    }

    pub fn dismiss(&self, id: u64) -> bool {
        let mut stack = self.lock();
        let before = stack.active.len();
        stack.active.retain(|n| n.id != id);
        let removed = before != stack.active.len();
        if removed {
            if let Some(tx) = &stack.dismissed {
                // a dropped receiver only means nobody redraws
                let _ = tx.send(id);
            }
        }
        removed
    }

    /// Ids of banners as they are removed, so a view can redraw from
    /// [`active`](NotificationCenter::active). Replaces any earlier
    /// subscription.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<u64> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().dismissed = Some(tx);
        rx
    }

    /// Banners currently on screen, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.lock().active.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Stack> {
        self.stack.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}
