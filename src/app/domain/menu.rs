use super::messages::Command;

/// Id of the selector popup in the host UI.
pub const SELECTOR_MENU_ID: &str = "fontsetter-selector-menu";

/// Prefix of the element id a font entry gets; preview rules select on it.
pub const ENTRY_ID_PREFIX: &str = "entry-";

/// The fixed entries at the top of the selector menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    RestoreDefault,
    ApplyToMenu,
    UseSmoothing,
    ShowAllFonts,
}

impl ControlKind {
    pub fn command(self) -> Command {
        match self {
            ControlKind::RestoreDefault => Command::RestoreDefault,
            ControlKind::ApplyToMenu => Command::ToggleMenuFont,
            ControlKind::UseSmoothing => Command::ToggleSmoothing,
            ControlKind::ShowAllFonts => Command::ToggleShowAllFonts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// `checked` is `None` for plain command entries.
    Control {
        kind: ControlKind,
        label: String,
        checked: Option<bool>,
    },
    Font {
        label: String,
        checked: bool,
        index: usize,
    },
    Separator,
}

impl MenuEntry {
    /// The command sent when the entry is activated.
    pub fn command(&self) -> Option<Command> {
        match self {
            MenuEntry::Control { kind, .. } => Some(kind.command()),
            MenuEntry::Font { label, .. } => Some(Command::SetFont(label.clone())),
            MenuEntry::Separator => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Control { label, .. } | MenuEntry::Font { label, .. } => Some(label),
            MenuEntry::Separator => None,
        }
    }

    /// Checked state, `None` when the entry is not checkable.
    pub fn checked(&self) -> Option<bool> {
        match self {
            MenuEntry::Control { checked, .. } => *checked,
            MenuEntry::Font { checked, .. } => Some(*checked),
            MenuEntry::Separator => None,
        }
    }
}

pub fn entry_element_id(index: usize) -> String {
    format!("{}{}", ENTRY_ID_PREFIX, index)
}

/// The selector menu, rebuilt wholesale on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: MenuEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }
}
