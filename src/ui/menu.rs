use fltk::{
    app::Sender,
    enums::{Font, Shortcut},
    menu::{MenuButton, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Command, MenuEntry};
use crate::app::infrastructure::host::MenuPopup;

/// Escape characters FLTK treats specially in menu paths.
pub fn escape_menu_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '\\' | '/' | '_' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '&' => escaped.push_str("&&"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// The selector popup, backed by an FLTK menu button.
pub struct SelectorMenu {
    pub menu: MenuButton,
    sender: Sender<Command>,
    last_index: Option<i32>,
}

impl SelectorMenu {
    pub fn new(menu: MenuButton, sender: Sender<Command>) -> Self {
        Self {
            menu,
            sender,
            last_index: None,
        }
    }

    pub fn popup(&mut self) {
        self.menu.popup();
    }
}

impl MenuPopup for SelectorMenu {
    fn clear(&mut self) {
        self.menu.clear();
        self.last_index = None;
    }

    fn append(&mut self, entry: &MenuEntry) {
        // FLTK draws a divider under an item rather than adding one.
        if let MenuEntry::Separator = entry {
            if let Some(mut item) = self.last_index.and_then(|idx| self.menu.at(idx)) {
                item.set_flag(MenuFlag::MenuDivider);
            }
            return;
        }

        let (Some(label), Some(command)) = (entry.label(), entry.command()) else {
            return;
        };
        let flag = match entry.checked() {
            Some(true) => MenuFlag::Toggle | MenuFlag::Value,
            Some(false) => MenuFlag::Toggle,
            None => MenuFlag::Normal,
        };

        let s = self.sender;
        let idx = self.menu.add(&escape_menu_label(label), Shortcut::None, flag, move |_| {
            s.send(command.clone())
        });
        self.last_index = Some(idx);

        if let MenuEntry::Font { label, .. } = entry {
            if let Some(mut item) = self.menu.at(idx) {
                item.set_label_font(Font::by_name(label));
            }
        }
    }
}
