//! Fire-and-forget events from the dialog layer to the application core
//!
//! Dialog code runs off the update loop and only ever sends; the runtime drains
//! the receiving end between messages.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IpcEventKind {
    OpenRequested,
    SaveRequested,
}

/// A request carrying the folder the user picked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpcEvent {
    pub kind: IpcEventKind,
    pub path: PathBuf,
}

impl IpcEvent {
    pub fn new(kind: IpcEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Wire form for transports that carry text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Sending half handed to dialog code
#[derive(Debug, Clone)]
pub struct IpcSender {
    tx: Sender<IpcEvent>,
}

impl IpcSender {
    /// Send without waiting; a closed channel only gets logged
    pub fn send(&self, event: IpcEvent) {
        tracing::debug!(target: "ipc", kind = ?event.kind, path = %event.path.display(), "send");
        if self.tx.send(event).is_err() {
            tracing::warn!(target: "ipc", "event dropped, receiver is gone");
        }
    }
}

/// Create a connected sender/receiver pair
pub fn channel() -> (IpcSender, Receiver<IpcEvent>) {
    let (tx, rx) = mpsc::channel();
    (IpcSender { tx }, rx)
}
