use fltk::{
    app,
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

const HOMEPAGE: &str = "https://github.com/quillpad/quillpad";

/// Show the About dialog.
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(360, 240)
        .with_label("About QuillPad")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 220, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default();
    title.set_label("QuillPad");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label("A small, no-frills notepad written in Rust");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    desc_frame.set_align(Align::Center | Align::Inside);
    flex.fixed(&desc_frame, 25);

    let mut website = Button::default().with_label("Visit Website");
    website.set_callback(|_| {
        if let Err(e) = open::that(HOMEPAGE) {
            eprintln!("Failed to open {}: {}", HOMEPAGE, e);
        }
    });
    flex.fixed(&website, 30);

    let mut close = Button::default().with_label("Close");
    let mut dialog_handle = dialog.clone();
    close.set_callback(move |_| dialog_handle.hide());
    flex.fixed(&close, 30);

    flex.end();
    dialog.end();
    dialog.show();

    while dialog.shown() {
        app::wait();
    }
}
