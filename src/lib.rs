//! Fiddle - editor mosaic and project dialogs for a code playground
//!
//! This crate provides the state core of the playground, implementing the Elm
//! Architecture pattern: messages flow through `update`, side effects come back
//! as commands the runtime performs.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod files;
pub mod ipc;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
