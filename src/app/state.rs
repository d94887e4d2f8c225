use fltk::{dialog, frame::Frame, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

use super::error::Result;
use super::session::{Decision, DocumentSession};
use super::settings::{
    AppOptions, JsonSettingsStore, Theme, WindowGeometry, WindowSettings,
};
use super::shell::{CloseAction, CloseFlow};
use crate::ui::editor::EditorSurface;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Main application coordinator: routes dispatched messages into the
/// document session and keeps the widgets in sync with its state.
pub struct AppState {
    pub session: DocumentSession<EditorSurface>,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub status: Frame,
    pub close_flow: CloseFlow,
    pub settings: WindowSettings,
    pub store: JsonSettingsStore,
    pub options: AppOptions,
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        session: DocumentSession<EditorSurface>,
        settings: WindowSettings,
        store: JsonSettingsStore,
        options: AppOptions,
        dark_mode: bool,
    ) -> Self {
        let MainWidgets {
            wind,
            menu,
            status,
            text_editor,
            ..
        } = widgets;

        Self {
            session,
            editor: text_editor,
            window: wind,
            menu,
            status,
            close_flow: CloseFlow::new(),
            settings,
            store,
            options,
            dark_mode,
        }
    }

    /// Sync title and word count with the session.
    pub fn refresh(&mut self) {
        let title = self.session.display_title();
        self.window.set_label(&title);
        self.status
            .set_label(&format!("Words: {}", self.session.word_count()));
    }

    // --- File commands ---

    pub fn file_new(&mut self) {
        let result = self.session.file_new();
        self.finish_command(result);
    }

    pub fn file_open(&mut self) {
        let result = self.session.file_open();
        self.finish_command(result);
    }

    pub fn file_save(&mut self) {
        let result = self.session.file_save();
        self.finish_command(result);
    }

    pub fn file_save_as(&mut self) {
        let result = self.session.file_save_as();
        self.finish_command(result);
    }

    pub fn file_dropped(&mut self, payload: &str) {
        let result = self.session.open_dropped(payload);
        self.finish_command(result);
    }

    /// A failed command aborts with its state untouched; tell the user
    /// and repaint whatever did change (a guard may have saved).
    fn finish_command(&mut self, result: Result<bool>) {
        if let Err(e) = result {
            dialog::alert_default(&e.to_string());
        }
        self.refresh();
    }

    // --- Close sequence ---

    /// Drive one close request through the state machine. Returns true
    /// when the shell should terminate the process.
    pub fn request_close(&mut self) -> bool {
        if !self.close_flow.request_close() {
            return false;
        }

        let geometry = WindowGeometry {
            x: self.window.x(),
            y: self.window.y(),
            width: self.window.w(),
            height: self.window.h(),
            maximized: self.window.maximize_active(),
        };

        let decision = match self.session.handle_close_intent(
            geometry,
            &mut self.settings,
            &self.store,
            self.options.persist_settings,
        ) {
            Ok(decision) => decision,
            Err(e) => {
                dialog::alert_default(&e.to_string());
                Decision::Abort
            }
        };
        self.refresh();

        match self.close_flow.resolve(decision) {
            CloseAction::Terminate => true,
            CloseAction::Stay => false,
        }
    }

    // --- View ---

    pub fn toggle_dark_mode(&mut self) {
        if !self.options.theming {
            return;
        }
        self.dark_mode = !self.dark_mode;
        self.settings.theme = if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Normal
        };
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.status,
            self.dark_mode,
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);
    }
}
