use std::io::{self, IsTerminal, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Common OSC 52 size limit (base64 payload bytes).
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard not available: output is not a terminal")]
    NotAvailable,
    #[error("payload too large ({actual} > {max} bytes)")]
    TooLarge { max: usize, actual: usize },
    #[error("clipboard write failed: {0}")]
    Write(#[from] io::Error),
}

/// Where clipboard text goes.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Sets the system clipboard by writing an OSC 52 sequence to the terminal.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
    enabled: bool,
}

impl Osc52Clipboard<io::Stdout> {
    /// Clipboard on stdout; disabled when stdout is redirected.
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let enabled = stdout.is_terminal();
        let mut clipboard = Self::with_writer(stdout);
        clipboard.enabled = enabled;
        clipboard
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            enabled: true,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.enabled {
            return Err(ClipboardError::NotAvailable);
        }
        let encoded = STANDARD.encode(text.as_bytes());
        if encoded.len() > MAX_OSC52_PAYLOAD {
            return Err(ClipboardError::TooLarge {
                max: MAX_OSC52_PAYLOAD,
                actual: encoded.len(),
            });
        }
        write!(self.writer, "\x1b]52;c;{encoded}\x07")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClipboardError, ClipboardSink, Osc52Clipboard, MAX_OSC52_PAYLOAD};

    #[test]
    fn writes_osc52_sequence() {
        let mut clipboard = Osc52Clipboard::with_writer(Vec::new());
        clipboard.set_text("hi").unwrap();
        assert_eq!(clipboard.into_inner(), b"\x1b]52;c;aGk=\x07".to_vec());
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let mut clipboard = Osc52Clipboard::with_writer(Vec::new());
        let text = "x".repeat(MAX_OSC52_PAYLOAD);
        assert!(matches!(
            clipboard.set_text(&text),
            Err(ClipboardError::TooLarge { .. })
        ));
        assert!(clipboard.into_inner().is_empty());
    }
}
