//! Sharing a cleanup through whatever the host offers: a native share sheet,
//! or failing that the clipboard.

use crate::models::CleanupEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}
impl SharePayload {
    pub fn for_cleanup(cleanup: &CleanupEvent, url: &str) -> Self {
        Self {
            title: String::from("ShoreSquad"),
            text: share_text(cleanup),
            url: String::from(url),
        }
    }
}

pub fn share_text(cleanup: &CleanupEvent) -> String {
    format!(
        "Join me at {} on {}! Help clean our beaches. #ShoreSquad",
        cleanup.title,
        cleanup.date.format("%Y-%m-%d")
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("Share was cancelled or rejected: {0}")]
    Rejected(String),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Neither sharing nor the clipboard is available")]
    Unsupported,
}

pub trait NativeShare {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Host capabilities, each optional.
#[derive(Default)]
pub struct ShareCapabilities {
    pub native: Option<Box<dyn NativeShare>>,
    pub clipboard: Option<Box<dyn Clipboard>>,
}
impl ShareCapabilities {
    pub fn with_native(mut self, native: impl NativeShare + 'static) -> Self {
        self.native = Some(Box::new(native));
        self
    }
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    /// Native sharing wins when present; the clipboard only receives the text.
    pub fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        if let Some(native) = &self.native {
            native.share(payload)?;
            return Ok(ShareOutcome::Shared);
        }
        if let Some(clipboard) = &self.clipboard {
            clipboard.write_text(&payload.text)?;
            return Ok(ShareOutcome::Copied);
        }
        Err(ShareError::Unsupported)
    }
}
