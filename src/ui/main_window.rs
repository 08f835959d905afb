use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuButton,
    prelude::*,
    window::Window,
};

use crate::app::domain::Command;

pub const BAR_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub addon_bar: Flex,
    pub toolbar_button: Button,
    pub sample: Frame,
    pub selector: MenuButton,
}

pub fn build_main_window(sender: &Sender<Command>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 640, 480, "FontSetter");
    wind.set_xclass("FontSetter");

    let mut flex = Flex::new(0, 0, 640, 480, None);
    flex.set_type(FlexType::Column);

    // Add-on bar, collapsed until first run places the button
    let mut addon_bar = Flex::default();
    addon_bar.set_type(FlexType::Row);
    addon_bar.set_frame(FrameType::FlatBox);
    addon_bar.set_color(Color::from_rgb(240, 240, 240));
    Frame::default();
    let mut toolbar_button = Button::default().with_label("Aa");
    toolbar_button.set_tooltip("FontSetter");
    addon_bar.fixed(&toolbar_button, 40);
    let s = *sender;
    toolbar_button.set_callback(move |_| s.send(Command::OpenPopup));
    toolbar_button.hide();
    addon_bar.end();
    addon_bar.hide();
    flex.fixed(&addon_bar, 0);

    let mut sample = Frame::default().with_label(
        "The quick brown fox jumps over the lazy dog\n敏捷的棕色狐狸跳过了懒狗",
    );
    sample.set_align(Align::Center | Align::Inside | Align::Wrap);

    // Status bar panel, also the selector popup
    let mut status_bar = Flex::default();
    status_bar.set_type(FlexType::Row);
    Frame::default();
    let mut selector = MenuButton::default().with_label("FontSetter");
    selector.set_frame(FrameType::FlatBox);
    status_bar.fixed(&selector, 120);
    status_bar.end();
    flex.fixed(&status_bar, BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        addon_bar,
        toolbar_button,
        sample,
        selector,
    }
}
