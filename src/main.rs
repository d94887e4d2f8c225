use fltk::{app, enums::Event, prelude::*};

use quill_pad::app::messages::Message;
use quill_pad::app::session::DocumentSession;
use quill_pad::app::settings::{self, AppOptions, JsonSettingsStore, WindowSettings};
use quill_pad::app::state::AppState;
use quill_pad::ui::about::show_about_dialog;
use quill_pad::ui::editor::{install_editor_handlers, EditorSurface};
use quill_pad::ui::file_dialogs::NativeDialogs;
use quill_pad::ui::main_window::build_main_window;
use quill_pad::ui::menu::{build_context_menu, build_menu};
use quill_pad::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use quill_pad::ui::theme::set_windows_titlebar_theme;

#[cfg(not(target_os = "windows"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() {
    let options = AppOptions::default();
    let store = JsonSettingsStore::at_default_location();

    // Settings are read once, before the window exists; a missing or
    // corrupt blob falls back to defaults instead of failing startup.
    let settings = if options.persist_settings {
        settings::load_or_default(&store)
    } else {
        WindowSettings::default()
    };
    let dark_mode = options.theming && settings.theme.is_dark();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings, &options);
    build_menu(&mut widgets.menu, &sender, &options, dark_mode);
    build_context_menu(&mut widgets.context_menu, &sender);
    install_editor_handlers(&mut widgets.text_editor, widgets.context_menu.clone(), sender);

    apply_theme(
        &mut widgets.text_editor,
        &mut widgets.wind,
        &mut widgets.menu,
        &mut widgets.status,
        dark_mode,
    );

    let surface = EditorSurface::new(widgets.buffer.clone());
    let session = DocumentSession::new(surface, Box::new(NativeDialogs), Box::new(NativeDialogs));

    // The dirty flag must flip synchronously with the edit, not when the
    // message is dispatched; a load that replaces the text is marked clean
    // again right after set_text.
    {
        let dirty = session.dirty_flag();
        let s = sender;
        let mut buffer = widgets.buffer.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                dirty.set(true);
                s.send(Message::BufferModified);
            }
        });
    }

    // Two-phase close: the window never closes itself. The request is
    // intercepted here and relayed as a close intent; only the dispatch
    // loop below may actually quit.
    {
        let s = sender;
        widgets.wind.set_callback(move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        });
    }

    widgets.wind.show();
    if settings.maximized {
        widgets.wind.maximize();
    }
    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&widgets.wind, dark_mode);

    let mut state = AppState::new(widgets, session, settings, store, options, dark_mode);
    state.refresh();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileDropped(payload) => state.file_dropped(&payload),
                Message::FileExit | Message::WindowClose => {
                    if state.request_close() {
                        app.quit();
                    }
                }

                Message::EditUndo => state.editor.undo(),
                Message::EditRedo => state.editor.redo(),
                Message::EditCut => state.editor.cut(),
                Message::EditCopy => state.editor.copy(),
                Message::EditPaste => state.editor.paste(),
                Message::EditDelete => state.editor.kf_delete(),
                Message::SelectAll => state.editor.kf_select_all(),

                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ShowAbout => show_about_dialog(),
                Message::BufferModified => state.refresh(),
            }
        }
    }
    state.close_flow.mark_closed();
}
