//! Copying color strings to the host clipboard.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to copy to clipboard: {0}")]
pub struct ClipboardError(pub String);

/// Anything that accepts text for the clipboard.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard. One arboard handle is opened on first use and held for
/// the life of the value; on X11 and Wayland copied text dies with the handle.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
            self.inner = Some(cb);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError("clipboard unavailable".into()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

/// Copy `text`, surfacing the first failure.
pub fn copy(sink: &mut dyn ClipboardSink, text: &str) -> Result<(), ClipboardError> {
    match sink.set_text(text) {
        Ok(()) => {
            tracing::debug!(text, "copied to clipboard");
            Ok(())
        }
        Err(e) => {
            tracing::warn!("{e}");
            Err(e)
        }
    }
}
