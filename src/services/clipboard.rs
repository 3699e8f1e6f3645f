use crate::utils::Logger;

/// System clipboard sink for serialized reports.
///
/// Write failures are reported to the caller for logging only; they never
/// affect request state and are never shown to the user.
pub struct ClipboardService {
    logger: Logger,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self {
            logger: Logger::new("CLIPBOARD"),
        }
    }

    pub fn write(&self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        self.logger
            .debug(&format!("Copied {} bytes to clipboard", text.len()));
        Ok(())
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}
