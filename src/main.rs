use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use fltk::{app, prelude::*};

use fontsetter::app::domain::Command;
use fontsetter::app::domain::settings::{DEFAULT_LOCALE, host_keys};
use fontsetter::app::infrastructure::files::{FsResources, default_chrome_file};
use fontsetter::app::infrastructure::prefs::{JsonPrefFile, PrefBackend, PrefType};
use fontsetter::app::infrastructure::strings::BuiltinStrings;
use fontsetter::app::services::smoothing::FontSmoothing;
use fontsetter::app::state::{FontSetter, Host, STARTUP_DELAY};
use fontsetter::ui::fonts::FltkFonts;
use fontsetter::ui::main_window::build_main_window;
use fontsetter::ui::shell::{FltkShell, ToolbarState};
use fontsetter::ui::theme::FltkStyles;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn configured_locale(backend: &dyn PrefBackend) -> String {
    match backend.read(host_keys::LOCALE) {
        Ok(Some(value)) => String::from_pref(&value).unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        Ok(None) => DEFAULT_LOCALE.to_string(),
        Err(e) => {
            log::warn!("Failed to read {}: {}", host_keys::LOCALE, e);
            DEFAULT_LOCALE.to_string()
        }
    }
}

fn main() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    let app = app::App::default().load_system_fonts();
    let (sender, receiver) = app::channel::<Command>();

    let chrome_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_chrome_file);

    let backend = JsonPrefFile::open(JsonPrefFile::default_path());
    let locale = configured_locale(&backend);

    let mut widgets = build_main_window(&sender);
    widgets.wind.end();
    widgets.wind.show();

    let host = Host {
        shell: Box::new(FltkShell::new(&widgets, sender, ToolbarState::default_path())),
        styles: Box::new(FltkStyles::new()),
        fonts: Box::new(FltkFonts),
        strings: Box::new(BuiltinStrings::for_locale(&locale)),
    };
    let mut setter = FontSetter::new(
        Box::new(backend),
        Box::new(FsResources),
        chrome_file,
        host,
        FontSmoothing::for_platform(),
    );

    let ready = Rc::new(Cell::new(false));
    let ready_flag = ready.clone();
    app::add_timeout3(STARTUP_DELAY.as_secs_f64(), move |_| {
        ready_flag.set(true);
        app::awake();
    });

    let mut started = false;
    while app.wait() {
        if !started && ready.get() {
            started = true;
            setter.startup();
        }

        if let Some(command) = receiver.recv() {
            setter.dispatch(command);
        }
    }
}
