//! Editors dropdown
//!
//! `render_menu` turns the registry and layout into a plain menu tree. Items carry
//! the message to dispatch when clicked; all state changes happen in `update`.

use std::fmt;

use crate::messages::MenuMsg;
use crate::model::{EditorMosaic, EditorState, MosaicNode};

/// Icons used by the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Applications,
    EyeOpen,
    EyeOff,
    Cross,
    Plus,
    GridView,
}

impl Icon {
    /// Single-glyph stand-in for text front-ends
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Applications => "≡",
            Icon::EyeOpen => "●",
            Icon::EyeOff => "○",
            Icon::Cross => "×",
            Icon::Plus => "+",
            Icon::GridView => "▦",
        }
    }
}

/// A clickable menu row, possibly with a submenu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub key: String,
    pub text: String,
    pub icon: Icon,
    pub disabled: bool,
    pub on_click: MenuMsg,
    pub children: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Item(MenuItem),
    Divider,
}

/// The rendered dropdown
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Menu {
    pub entries: Vec<MenuEntry>,
}

/// The button that opens the dropdown
pub const MENU_BUTTON: (&str, Icon) = ("Editors", Icon::Applications);

impl Menu {
    /// Top-level items, skipping dividers
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Divider => None,
        })
    }

    pub fn item(&self, key: &str) -> Option<&MenuItem> {
        self.items().find(|item| item.key == key)
    }

    /// The message a click on `key` dispatches, or `None` when disabled
    pub fn click(&self, key: &str) -> Option<MenuMsg> {
        self.item(key)
            .filter(|item| !item.disabled)
            .map(|item| item.on_click.clone())
    }
}

/// Build the dropdown from the registry and the current layout
pub fn render_menu(registry: &EditorMosaic, layout: &MosaicNode) -> Menu {
    let leaf_count = layout.leaf_count();
    let mut entries = Vec::with_capacity(registry.entries().len() + 4);

    for (id, state) in registry.states() {
        let visible = state == EditorState::Visible;

        // Can't hide the last panel
        let must_show = visible && leaf_count < 2;

        let children = if id.is_main() {
            Vec::new()
        } else {
            vec![MenuEntry::Item(MenuItem {
                key: format!("remove:{}", id),
                text: "Remove".to_string(),
                icon: Icon::Cross,
                disabled: false,
                on_click: MenuMsg::RemoveEditor(id.clone()),
                children: Vec::new(),
            })]
        };

        entries.push(MenuEntry::Item(MenuItem {
            key: id.to_string(),
            text: id.title(),
            icon: if visible { Icon::EyeOpen } else { Icon::EyeOff },
            disabled: must_show,
            on_click: MenuMsg::ToggleItem(id.clone()),
            children,
        }));
    }

    entries.push(MenuEntry::Divider);
    entries.push(MenuEntry::Item(MenuItem {
        key: "add-editor".to_string(),
        text: "Add Editor".to_string(),
        icon: Icon::Plus,
        disabled: false,
        on_click: MenuMsg::AddEditor,
        children: Vec::new(),
    }));

    entries.push(MenuEntry::Divider);
    entries.push(MenuEntry::Item(MenuItem {
        key: "reset-layout".to_string(),
        text: "Reset Layout".to_string(),
        icon: Icon::GridView,
        disabled: false,
        on_click: MenuMsg::ResetLayout,
        children: Vec::new(),
    }));

    Menu { entries }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry {
                MenuEntry::Divider => writeln!(f, "  ────────")?,
                MenuEntry::Item(item) => {
                    write!(f, "  {} {}", item.icon.glyph(), item.text)?;
                    if item.disabled {
                        write!(f, " (locked)")?;
                    }
                    for child in &item.children {
                        if let MenuEntry::Item(sub) = child {
                            write!(f, "  [{} {}]", sub.icon.glyph(), sub.text)?;
                        }
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}
