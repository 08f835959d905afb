pub mod fonts;
pub mod main_window;
pub mod menu;
pub mod shell;
pub mod theme;
