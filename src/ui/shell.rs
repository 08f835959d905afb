use std::fs;
use std::path::{Path, PathBuf};

use fltk::{button::Button, dialog, group::Flex, prelude::*, window::Window};
use serde::{Deserialize, Serialize};

use super::main_window::{BAR_HEIGHT, MainWidgets};
use super::menu::SelectorMenu;
use crate::app::controllers::first_run::ADDON_BAR_ID;
use crate::app::domain::Command;
use crate::app::domain::menu::SELECTOR_MENU_ID;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::{MenuPopup, Toolbar, UiShell};
use crate::app::state::{STATUSBAR_ANCHOR, TOOLBAR_BUTTON_ID};

/// Persisted layout of the add-on bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolbarState {
    #[serde(default)]
    pub current_set: Vec<String>,

    #[serde(default = "default_collapsed")]
    pub collapsed: bool,
}

fn default_collapsed() -> bool {
    true
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            current_set: Vec::new(),
            collapsed: default_collapsed(),
        }
    }
}

impl ToolbarState {
    /// Load from `path`, falling back to defaults when missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Get toolbar state path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("fontsetter");
        path.push("toolbar.json");
        path
    }
}

/// The add-on bar: a row of buttons under the window's top edge.
pub struct AddonBar {
    bar: Flex,
    parent: Flex,
    button: Button,
    state: ToolbarState,
    state_path: PathBuf,
}

impl AddonBar {
    pub fn new(bar: Flex, parent: Flex, button: Button, state_path: PathBuf) -> Self {
        let mut toolbar = Self {
            bar,
            parent,
            button,
            state: ToolbarState::load(&state_path),
            state_path,
        };
        toolbar.sync_widgets();
        toolbar
    }

    fn sync_widgets(&mut self) {
        if self.state.current_set.iter().any(|id| id == TOOLBAR_BUTTON_ID) {
            self.button.show();
        } else {
            self.button.hide();
        }

        if self.state.collapsed {
            self.bar.hide();
            self.parent.fixed(&self.bar, 0);
        } else {
            self.bar.show();
            self.parent.fixed(&self.bar, BAR_HEIGHT);
        }
        self.parent.layout();
        self.parent.redraw();
    }
}

impl Toolbar for AddonBar {
    fn current_set(&self) -> Vec<String> {
        self.state.current_set.clone()
    }

    fn set_current_set(&mut self, items: Vec<String>) {
        self.state.current_set = items;
        self.sync_widgets();
    }

    fn is_collapsed(&self) -> bool {
        self.state.collapsed
    }

    fn set_collapsed(&mut self, collapsed: bool) {
        self.state.collapsed = collapsed;
        self.sync_widgets();
    }

    fn persist(&mut self) {
        if let Err(e) = self.state.save(&self.state_path) {
            log::warn!("Failed to save {}: {}", self.state_path.display(), e);
        }
    }
}

/// The FLTK window as seen by the engine.
pub struct FltkShell {
    wind: Window,
    selector: SelectorMenu,
    addon_bar: AddonBar,
}

impl FltkShell {
    pub fn new(widgets: &MainWidgets, sender: fltk::app::Sender<Command>, toolbar_path: PathBuf) -> Self {
        Self {
            wind: widgets.wind.clone(),
            selector: SelectorMenu::new(widgets.selector.clone(), sender),
            addon_bar: AddonBar::new(
                widgets.addon_bar.clone(),
                widgets.flex.clone(),
                widgets.toolbar_button.clone(),
                toolbar_path,
            ),
        }
    }
}

impl UiShell for FltkShell {
    fn popup(&mut self, id: &str) -> Option<&mut dyn MenuPopup> {
        if id == SELECTOR_MENU_ID {
            Some(&mut self.selector)
        } else {
            None
        }
    }

    fn has_element(&self, id: &str) -> bool {
        match id {
            SELECTOR_MENU_ID | STATUSBAR_ANCHOR => self.wind.shown(),
            TOOLBAR_BUTTON_ID => self.addon_bar.button.visible(),
            ADDON_BAR_ID => true,
            _ => false,
        }
    }

    fn open_popup(&mut self, popup_id: &str, anchor_id: &str) -> bool {
        if popup_id != SELECTOR_MENU_ID || !self.has_element(anchor_id) {
            return false;
        }
        self.selector.popup();
        true
    }

    fn toolbar(&mut self, id: &str) -> Option<&mut dyn Toolbar> {
        if id == ADDON_BAR_ID {
            Some(&mut self.addon_bar)
        } else {
            None
        }
    }

    fn alert(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_state_defaults_and_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fontsetter").join("toolbar.json");

        let state = ToolbarState::load(&path);
        assert!(state.collapsed);
        assert!(state.current_set.is_empty());

        let state = ToolbarState {
            current_set: vec![TOOLBAR_BUTTON_ID.to_string()],
            collapsed: false,
        };
        state.save(&path).unwrap();
        assert_eq!(ToolbarState::load(&path), state);
    }

    #[test]
    fn test_toolbar_state_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbar.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(ToolbarState::load(&path), ToolbarState::default());
    }
}
