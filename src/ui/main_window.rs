use fltk::{
    enums::{Align, FrameType},
    frame::Frame,
    group::Flex,
    menu::{MenuBar, MenuButton},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::settings::{AppOptions, WindowSettings};

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub status: Frame,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub context_menu: MenuButton,
}

/// Build the single main window: menu bar on top, editor in the middle,
/// word-count status line at the bottom. Placement comes from the
/// persisted settings.
pub fn build_main_window(settings: &WindowSettings, options: &AppOptions) -> MainWidgets {
    let mut wind = Window::new(
        settings.pos_x,
        settings.pos_y,
        settings.width,
        settings.height,
        "Untitled - QuillPad",
    );
    wind.set_xclass("QuillPad");
    if !options.framed {
        wind.set_border(false);
    }

    let mut flex = Flex::new(0, 0, settings.width, settings.height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut status = Frame::new(0, 0, 0, STATUS_HEIGHT, "Words: 0");
    status.set_frame(FrameType::FlatBox);
    status.set_align(Align::Inside | Align::Left);
    status.set_label_size(12);
    flex.fixed(&status, STATUS_HEIGHT);

    flex.end();
    wind.resizable(&flex);

    // Zero-sized; only ever shown through popup() from the editor's
    // right-click handler.
    let context_menu = MenuButton::default();

    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        status,
        text_editor,
        buffer,
        context_menu,
    }
}
