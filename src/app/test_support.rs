//! In-memory stand-ins for the host collaborators, shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::app::domain::MenuEntry;
use crate::app::domain::menu::SELECTOR_MENU_ID;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::files::{FsResources, ResourceStore};
use crate::app::infrastructure::host::{
    FontEnumerator, MenuPopup, RuleListSheet, StyleHost, StyleSheet, Toolbar, UiShell,
};
use crate::app::infrastructure::platform::{SmoothingApi, SpiAction};
use crate::app::infrastructure::prefs::{MemoryPrefs, PrefBackend, PrefValue};
use crate::app::infrastructure::strings::BuiltinStrings;
use crate::app::services::smoothing::FontSmoothing;
use crate::app::services::style_mirror::FONT_SHEET_HREF;
use crate::app::state::{FontSetter, Host};

/// A backend where every call fails.
pub struct FailingPrefs;

impl PrefBackend for FailingPrefs {
    fn read(&self, _key: &str) -> Result<Option<PrefValue>> {
        Err(AppError::Storage("read refused".to_string()))
    }

    fn write(&mut self, _key: &str, _value: PrefValue) -> Result<()> {
        Err(AppError::Storage("write refused".to_string()))
    }

    fn clear(&mut self, _key: &str) -> Result<bool> {
        Err(AppError::Storage("clear refused".to_string()))
    }
}

/// In-memory preferences that turn read-only once `locked` is set.
pub struct LockablePrefs {
    inner: MemoryPrefs,
    locked: Rc<Cell<bool>>,
}

impl LockablePrefs {
    pub fn new(locked: Rc<Cell<bool>>) -> Self {
        Self {
            inner: MemoryPrefs::new(),
            locked,
        }
    }
}

impl PrefBackend for LockablePrefs {
    fn read(&self, key: &str) -> Result<Option<PrefValue>> {
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: PrefValue) -> Result<()> {
        if self.locked.get() {
            return Err(AppError::Storage("store is read-only".to_string()));
        }
        self.inner.write(key, value)
    }

    fn clear(&mut self, key: &str) -> Result<bool> {
        if self.locked.get() {
            return Err(AppError::Storage("store is read-only".to_string()));
        }
        self.inner.clear(key)
    }
}

/// A resource store that cannot open anything.
pub struct BrokenResources;

impl ResourceStore for BrokenResources {
    fn read_text(&self, _path: &Path) -> std::io::Result<Option<String>> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"))
    }

    fn write_text(&mut self, _path: &Path, _text: &str) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"))
    }
}

/// A rule list that refuses preview rules mentioning any of `reject`.
#[derive(Default)]
pub struct PickySheet {
    inner: RuleListSheet,
    pub reject: Vec<String>,
}

impl StyleSheet for PickySheet {
    fn rule_count(&self) -> usize {
        self.inner.rule_count()
    }

    fn rules(&self) -> Vec<String> {
        self.inner.rules()
    }

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<()> {
        if self.reject.iter().any(|name| rule.contains(name.as_str())) {
            return Err(AppError::InvalidRule(rule.to_string()));
        }
        self.inner.insert_rule(rule, index)
    }

    fn delete_rule(&mut self, index: usize) -> Result<()> {
        self.inner.delete_rule(index)
    }
}

pub struct FakeStyles {
    sheet: Option<PickySheet>,
}

impl FakeStyles {
    pub fn with_sheet() -> Self {
        Self {
            sheet: Some(PickySheet::default()),
        }
    }

    pub fn without_sheet() -> Self {
        Self { sheet: None }
    }

    pub fn rejecting(names: &[&str]) -> Self {
        Self {
            sheet: Some(PickySheet {
                inner: RuleListSheet::new(),
                reject: names.iter().map(|n| n.to_string()).collect(),
            }),
        }
    }

    pub fn rules(&self) -> Vec<String> {
        self.sheet.as_ref().map(|s| s.rules()).unwrap_or_default()
    }
}

impl StyleHost for FakeStyles {
    fn sheet(&mut self, href: &str) -> Option<&mut dyn StyleSheet> {
        if href != FONT_SHEET_HREF {
            return None;
        }
        self.sheet.as_mut().map(|s| s as &mut dyn StyleSheet)
    }
}

/// Everything the fake shell saw, shared with the test body.
#[derive(Debug, Default)]
pub struct ShellLog {
    pub entries: Vec<MenuEntry>,
    pub clears: usize,
    pub alerts: Vec<String>,
    pub opened: Vec<(String, String)>,
    pub toolbar_set: Vec<String>,
    pub collapsed: bool,
    pub persisted: usize,
}

struct FakePopup {
    log: Rc<RefCell<ShellLog>>,
}

impl MenuPopup for FakePopup {
    fn clear(&mut self) {
        let mut log = self.log.borrow_mut();
        log.entries.clear();
        log.clears += 1;
    }

    fn append(&mut self, entry: &MenuEntry) {
        self.log.borrow_mut().entries.push(entry.clone());
    }
}

struct FakeToolbar {
    log: Rc<RefCell<ShellLog>>,
}

impl Toolbar for FakeToolbar {
    fn current_set(&self) -> Vec<String> {
        self.log.borrow().toolbar_set.clone()
    }

    fn set_current_set(&mut self, items: Vec<String>) {
        self.log.borrow_mut().toolbar_set = items;
    }

    fn is_collapsed(&self) -> bool {
        self.log.borrow().collapsed
    }

    fn set_collapsed(&mut self, collapsed: bool) {
        self.log.borrow_mut().collapsed = collapsed;
    }

    fn persist(&mut self) {
        self.log.borrow_mut().persisted += 1;
    }
}

pub struct FakeShell {
    log: Rc<RefCell<ShellLog>>,
    popup: Option<FakePopup>,
    toolbar: Option<FakeToolbar>,
    elements: Vec<String>,
}

impl FakeShell {
    pub fn new() -> Self {
        let log = Rc::new(RefCell::new(ShellLog::default()));
        Self {
            popup: Some(FakePopup { log: log.clone() }),
            toolbar: Some(FakeToolbar { log: log.clone() }),
            elements: vec![SELECTOR_MENU_ID.to_string(), "tcfontsetter".to_string()],
            log,
        }
    }

    pub fn without_menu() -> Self {
        let mut shell = Self::new();
        shell.popup = None;
        shell.elements.retain(|e| e != SELECTOR_MENU_ID);
        shell
    }

    pub fn log(&self) -> Rc<RefCell<ShellLog>> {
        self.log.clone()
    }
}

impl UiShell for FakeShell {
    fn popup(&mut self, id: &str) -> Option<&mut dyn MenuPopup> {
        if id != SELECTOR_MENU_ID {
            return None;
        }
        self.popup.as_mut().map(|p| p as &mut dyn MenuPopup)
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e == id)
    }

    fn open_popup(&mut self, popup_id: &str, anchor_id: &str) -> bool {
        if !self.has_element(popup_id) || !self.has_element(anchor_id) {
            return false;
        }
        self.log
            .borrow_mut()
            .opened
            .push((popup_id.to_string(), anchor_id.to_string()));
        true
    }

    fn toolbar(&mut self, id: &str) -> Option<&mut dyn Toolbar> {
        if id != "addon-bar" {
            return None;
        }
        self.toolbar.as_mut().map(|t| t as &mut dyn Toolbar)
    }

    fn alert(&mut self, message: &str) {
        self.log.borrow_mut().alerts.push(message.to_string());
    }
}

pub struct FakeFonts {
    pub script: Vec<String>,
    pub all: Vec<String>,
    pub fail: bool,
}

impl FakeFonts {
    pub fn new(script: &[&str], all: &[&str]) -> Self {
        Self {
            script: script.iter().map(|s| s.to_string()).collect(),
            all: all.iter().map(|s| s.to_string()).collect(),
            fail: false,
        }
    }
}

impl FontEnumerator for FakeFonts {
    fn fonts_for_language(&self, _language: &str) -> Result<Vec<String>> {
        if self.fail {
            return Err(AppError::Enumeration("enumerator unavailable".to_string()));
        }
        Ok(self.script.clone())
    }

    fn all_fonts(&self) -> Result<Vec<String>> {
        if self.fail {
            return Err(AppError::Enumeration("enumerator unavailable".to_string()));
        }
        Ok(self.all.clone())
    }
}

#[derive(Debug, Default)]
pub struct SmoothingState {
    pub kind: u32,
    pub smoothing_on: u32,
    pub opens: usize,
    pub closes: usize,
    pub fail: bool,
}

pub struct FakeSmoothing {
    state: Rc<RefCell<SmoothingState>>,
}

impl FakeSmoothing {
    pub fn new(kind: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(SmoothingState {
                kind,
                smoothing_on: 1,
                ..Default::default()
            })),
        }
    }

    pub fn state(&self) -> Rc<RefCell<SmoothingState>> {
        self.state.clone()
    }
}

impl SmoothingApi for FakeSmoothing {
    fn open(&mut self) -> Result<()> {
        self.state.borrow_mut().opens += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.state.borrow_mut().closes += 1;
    }

    fn get(&mut self, action: SpiAction) -> Result<u32> {
        let s = self.state.borrow();
        if s.fail {
            return Err(AppError::PlatformControl {
                call: action.name(),
                code: 87,
            });
        }
        match action {
            SpiAction::GetFontSmoothing => Ok(s.smoothing_on),
            _ => Ok(s.kind),
        }
    }

    fn set(&mut self, action: SpiAction, value: u32) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if s.fail {
            return Err(AppError::PlatformControl {
                call: action.name(),
                code: 87,
            });
        }
        match action {
            SpiAction::SetFontSmoothing => s.smoothing_on = value,
            _ => s.kind = value,
        }
        Ok(())
    }
}

/// A FontSetter wired to fakes, with its override file in a temp dir.
pub struct Harness {
    pub setter: FontSetter,
    pub shell: Rc<RefCell<ShellLog>>,
    pub chrome_file: PathBuf,
    /// Set to make the preference store refuse writes.
    pub prefs_locked: Rc<Cell<bool>>,
    _dir: tempfile::TempDir,
}

impl Harness {
    pub fn new(fonts: FakeFonts) -> Self {
        Self::build(FakeShell::new(), FakeStyles::with_sheet(), fonts, None)
    }

    pub fn build(
        shell: FakeShell,
        styles: FakeStyles,
        fonts: FakeFonts,
        smoothing: Option<FakeSmoothing>,
    ) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let chrome_file = dir.path().join("chrome").join("userChrome.css");
        let shell_log = shell.log();
        let prefs_locked = Rc::new(Cell::new(false));
        let host = Host {
            shell: Box::new(shell),
            styles: Box::new(styles),
            fonts: Box::new(fonts),
            strings: Box::new(BuiltinStrings::for_locale("en-US")),
        };
        let setter = FontSetter::new(
            Box::new(LockablePrefs::new(prefs_locked.clone())),
            Box::new(FsResources),
            chrome_file.clone(),
            host,
            smoothing.map(|s| FontSmoothing::new(Box::new(s))),
        );
        Self {
            setter,
            shell: shell_log,
            chrome_file,
            prefs_locked,
            _dir: dir,
        }
    }

    pub fn chrome_text(&self) -> Option<String> {
        std::fs::read_to_string(&self.chrome_file).ok()
    }

    pub fn sheet_rules(&mut self) -> Vec<String> {
        self.setter
            .host
            .styles
            .sheet(FONT_SHEET_HREF)
            .map(|s| s.rules())
            .unwrap_or_default()
    }
}
