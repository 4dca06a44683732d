//! Plain-text clipboard access for copy, cut and paste.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard holds no text.
    #[error("clipboard holds no text")]
    Empty,

    #[error("clipboard access failed: {0}")]
    Access(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait Clipboard {
    fn get_text(&mut self) -> Result<String>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard, backed by arboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        self.inner.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            other => ClipboardError::Access(other.to_string()),
        })
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

/// In-process clipboard for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String> {
        self.contents.clone().ok_or(ClipboardError::Empty)
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_starts_empty() {
        let mut clip = MemoryClipboard::new();
        assert!(matches!(clip.get_text(), Err(ClipboardError::Empty)));
        clip.set_text("copied").unwrap();
        assert_eq!(clip.get_text().unwrap(), "copied");
        assert_eq!(clip.contents(), Some("copied"));
    }
}
