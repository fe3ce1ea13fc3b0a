//! One-shot prompt results
//!
//! Opening an input dialog hands the caller a [`PromptHandle`]; the dialog keeps the
//! matching [`PromptResolver`]. Resolving consumes the resolver, so a prompt can only
//! ever be answered once. A resolver dropped without an answer reads as cancelled.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// The user's answer to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResult {
    pub cancelled: bool,
    pub value: Option<String>,
}

impl PromptResult {
    pub fn confirmed(value: impl Into<String>) -> Self {
        Self {
            cancelled: false,
            value: Some(value.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            value: None,
        }
    }

    /// The trimmed input of a confirmed prompt, if it is not blank
    pub fn accepted_value(&self) -> Option<&str> {
        if self.cancelled {
            return None;
        }
        self.value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Write side of a prompt, owned by the open dialog
#[derive(Debug)]
pub struct PromptResolver {
    tx: Sender<PromptResult>,
}

impl PromptResolver {
    pub fn resolve(self, result: PromptResult) {
        // The handle may already be gone; nobody is waiting then
        let _ = self.tx.send(result);
    }
}

/// Read side of a prompt, owned by whoever opened it
#[derive(Debug)]
pub struct PromptHandle {
    rx: Receiver<PromptResult>,
}

impl PromptHandle {
    /// The answer, if the prompt has been closed
    pub fn try_result(&self) -> Option<PromptResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(PromptResult::cancelled()),
        }
    }

    /// Block until the prompt is closed. There is no timeout.
    pub fn wait(self) -> PromptResult {
        self.rx.recv().unwrap_or_else(|_| PromptResult::cancelled())
    }
}

/// Create a connected resolver/handle pair
pub fn prompt_channel() -> (PromptResolver, PromptHandle) {
    let (tx, rx) = mpsc::channel();
    (PromptResolver { tx }, PromptHandle { rx })
}
