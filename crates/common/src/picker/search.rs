use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// How long search input has to sit still before it is acted on
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Create a debounced search input.
///
/// Keystrokes go into the [`SearchInput`]; the [`SearchDebouncer`]
///  yields only the text that was current once typing paused for
///  `window`.
pub fn search_channel(window: Duration) -> (SearchInput, SearchDebouncer) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SearchInput { tx }, SearchDebouncer { rx, window })
}

#[derive(Debug, Clone)]
pub struct SearchInput {
    tx: mpsc::UnboundedSender<String>,
}

impl SearchInput {
    /// Report the full current text of the search box.
    ///
    /// Returns false once the debouncer is gone.
    pub fn send(&self, text: impl Into<String>) -> bool {
        self.tx.send(text.into()).is_ok()
    }
}

#[derive(Debug)]
pub struct SearchDebouncer {
    rx: mpsc::UnboundedReceiver<String>,
    window: Duration,
}

impl SearchDebouncer {
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Wait for the next settled value.
    ///
    /// `None` once every input is dropped and nothing is left to flush.
    pub async fn settled(&mut self) -> Option<String> {
        let mut latest = self.rx.recv().await?;
        loop {
            match timeout(self.window, self.rx.recv()).await {
                Ok(Some(next)) => latest = next,
                // quiet for a full window, or no more input coming
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }
}
