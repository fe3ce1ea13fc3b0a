//! Runtime - owns the model and performs the side effects `update` asks for
//!
//! Native dialogs run on the calling thread; project folder I/O runs on helper
//! threads that report back through `msg_tx`. Folders picked in a dialog reach the
//! model as IPC events, drained by [`Runtime::process_async_messages`].

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::commands::Cmd;
use crate::files::{self, FileDialogs};
use crate::ipc::{self, IpcEvent, IpcEventKind, IpcSender};
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

pub struct Runtime {
    model: AppModel,
    dialogs: Box<dyn FileDialogs>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    ipc_tx: IpcSender,
    ipc_rx: Receiver<IpcEvent>,
}

impl Runtime {
    pub fn new(model: AppModel, dialogs: Box<dyn FileDialogs>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let (ipc_tx, ipc_rx) = ipc::channel();
        Self {
            model,
            dialogs,
            msg_tx,
            msg_rx,
            ipc_tx,
            ipc_rx,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    /// Sender for events produced outside the dialog flow
    pub fn ipc_sender(&self) -> IpcSender {
        self.ipc_tx.clone()
    }

    /// Run one message through `update` and perform the resulting command.
    ///
    /// Returns whether a redraw is needed. Errors are failures the user must not
    /// be allowed to click past, such as a broken overwrite confirmation.
    pub fn dispatch(&mut self, msg: Msg) -> Result<bool> {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd)?;
                Ok(needs_redraw)
            }
            None => Ok(false),
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd)?;
                }
            }

            // =====================================================================
            // Native dialogs (rfd)
            // =====================================================================
            Cmd::ShowOpenProjectDialog => {
                files::show_open_dialog(self.dialogs.as_ref(), &self.ipc_tx);
            }
            Cmd::ShowSaveProjectDialog { intent, as_label } => {
                files::show_save_dialog(
                    self.dialogs.as_ref(),
                    &self.ipc_tx,
                    intent,
                    as_label.as_deref(),
                )?;
            }

            // =====================================================================
            // Project folder I/O
            // =====================================================================
            Cmd::LoadProject { path } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = files::read_project(&path).map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::ProjectLoaded { path, result }));
                });
            }
            Cmd::SaveProject { path, values } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result =
                        files::write_project(&path, &values).map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::ProjectSaved { path, result }));
                });
            }
        }
        Ok(())
    }

    /// Turn an IPC request into the message that handles it
    fn ipc_message(event: IpcEvent) -> Msg {
        match event.kind {
            IpcEventKind::OpenRequested => Msg::App(AppMsg::OpenProject(event.path)),
            IpcEventKind::SaveRequested => Msg::App(AppMsg::SaveProject(event.path)),
        }
    }

    /// Drain IPC events and background results without blocking.
    ///
    /// Returns true if any message requested a redraw.
    pub fn process_async_messages(&mut self) -> Result<bool> {
        let mut needs_redraw = false;
        loop {
            let msg = match self.ipc_rx.try_recv() {
                Ok(event) => Self::ipc_message(event),
                Err(_) => match self.msg_rx.try_recv() {
                    Ok(msg) => msg,
                    Err(_) => break,
                },
            };
            needs_redraw |= self.dispatch(msg)?;
        }
        Ok(needs_redraw)
    }

    /// Process messages until no project load or save is in flight, or `timeout`
    /// passes. Returns false on timeout.
    pub fn wait_for_io(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            self.process_async_messages()?;
            if !self.model.ui.is_loading && !self.model.ui.is_saving {
                return Ok(true);
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.dispatch(msg)?;
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!("Timed out waiting for project I/O");
                    return Ok(false);
                }
                Err(RecvTimeoutError::Disconnected) => return Ok(false),
            }
        }
    }
}
