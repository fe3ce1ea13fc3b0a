//! View module - data-driven rendering of the mosaic UI
//!
//! Nothing here mutates the model; rendered items carry the messages to dispatch.

pub mod dialog;
pub mod menu;
pub mod panels;

pub use menu::{render_menu, Icon, Menu, MenuEntry, MenuItem, MENU_BUTTON};
pub use panels::{describe_layout, describe_panels};
