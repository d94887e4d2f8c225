use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    enums::Event,
    menu::MenuButton,
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::messages::Message;
use crate::app::session::TextSurface;

/// The FLTK text buffer behind the session's `TextSurface` capability.
#[derive(Clone)]
pub struct EditorSurface {
    buffer: TextBuffer,
}

impl EditorSurface {
    pub fn new(buffer: TextBuffer) -> Self {
        Self { buffer }
    }
}

impl TextSurface for EditorSurface {
    fn text(&self) -> String {
        read_buffer_text(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }
}

/// Read an FLTK TextBuffer through the C API and free the malloc'd copy.
/// fltk-rs's own `TextBuffer::text()` copies the C string but never frees
/// the original allocation, leaking the full buffer size on every call.
pub fn read_buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is valid for as long as `buf` lives.
    // Fl_Text_Buffer_text returns a malloc'd, null-terminated copy (or null
    // for an empty buffer) which we duplicate into a String and then release
    // with the matching allocator.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}

/// Wire the editor's custom events: file drag-and-drop and the right-click
/// context menu.
///
/// FLTK delivers a drop as a DnD handshake followed by a Paste event
/// carrying the payload, so a flag set on DndRelease tells that Paste
/// apart from a regular clipboard paste.
pub fn install_editor_handlers(
    editor: &mut TextEditor,
    mut context_menu: MenuButton,
    sender: Sender<Message>,
) {
    let dnd_release = Rc::new(Cell::new(false));

    editor.handle(move |_, event| match event {
        Event::DndEnter | Event::DndDrag | Event::DndLeave => true,
        Event::DndRelease => {
            dnd_release.set(true);
            true
        }
        Event::Paste => {
            if !dnd_release.get() {
                // Regular clipboard paste; let the editor take it.
                return false;
            }
            dnd_release.set(false);
            sender.send(Message::FileDropped(app::event_text()));
            true
        }
        Event::Push => {
            if app::event_mouse_button() == app::MouseButton::Right {
                context_menu.popup();
                true
            } else {
                false
            }
        }
        _ => false,
    });
}
