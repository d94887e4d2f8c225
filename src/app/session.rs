use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::dialogs::{ConfirmDialog, FileDialogs, SaveChoice};
use super::error::{AppError, Result};
use super::settings::{SettingsStore, WindowGeometry, WindowSettings};
use super::word_count::count_words;

/// Outcome of the unsaved-changes guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Abort,
}

/// The editable text widget, reduced to what the session needs: read the
/// whole text, replace the whole text.
pub trait TextSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
}

/// Editor-side state of the single open document.
///
/// The dirty flag is shared: the buffer-modify callback installed by the
/// shell sets it synchronously on every edit, so replacing the text from
/// a load marks the document dirty for a moment until [`mark_clean`] runs.
///
/// [`mark_clean`]: DocumentSession::mark_clean
pub struct DocumentSession<T: TextSurface> {
    surface: T,
    dialogs: Box<dyn FileDialogs>,
    confirm: Box<dyn ConfirmDialog>,
    current_path: Option<PathBuf>,
    dirty: Rc<Cell<bool>>,
}

impl<T: TextSurface> DocumentSession<T> {
    pub fn new(surface: T, dialogs: Box<dyn FileDialogs>, confirm: Box<dyn ConfirmDialog>) -> Self {
        Self {
            surface,
            dialogs,
            confirm,
            current_path: None,
            dirty: Rc::new(Cell::new(false)),
        }
    }

    /// Shared handle for the buffer-modify callback.
    pub fn dirty_flag(&self) -> Rc<Cell<bool>> {
        self.dirty.clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// The text changed under the user's fingers.
    pub fn note_modified(&mut self) {
        self.dirty.set(true);
    }

    pub fn mark_clean(&mut self) {
        self.dirty.set(false);
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn word_count(&self) -> usize {
        count_words(&self.surface.text())
    }

    /// Window title: dirty marker, then the backing path or the untitled
    /// placeholder.
    pub fn display_title(&self) -> String {
        let name = self
            .current_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        let prefix = if self.is_dirty() { "*" } else { "" };
        format!("{}{} - QuillPad", prefix, name)
    }

    // --- Guard protocol ---

    /// Ask before anything that would throw away unsaved edits.
    ///
    /// A clean document proceeds without any prompt. Otherwise the user
    /// picks Save, Discard or Cancel; choosing Save runs the save command,
    /// and if the document is still dirty afterwards (the destination
    /// prompt was dismissed) the guard aborts rather than letting the
    /// edits be discarded. A failed write propagates as an error, which
    /// callers treat the same as an abort.
    pub fn confirm_discard_if_dirty(&mut self) -> Result<Decision> {
        if !self.is_dirty() {
            return Ok(Decision::Proceed);
        }

        match self.confirm.ask_save_changes() {
            SaveChoice::Save => {
                self.file_save()?;
                if self.is_dirty() {
                    Ok(Decision::Abort)
                } else {
                    Ok(Decision::Proceed)
                }
            }
            SaveChoice::Discard => Ok(Decision::Proceed),
            SaveChoice::Cancel => Ok(Decision::Abort),
        }
    }

    // --- File commands ---

    /// Reset to an empty untitled document. Returns false when the guard
    /// aborted.
    pub fn file_new(&mut self) -> Result<bool> {
        if self.confirm_discard_if_dirty()? == Decision::Abort {
            return Ok(false);
        }
        self.surface.set_text("");
        self.current_path = None;
        self.mark_clean();
        Ok(true)
    }

    /// Pick a file and load it. Returns false when the guard aborted or
    /// the dialog was cancelled.
    pub fn file_open(&mut self) -> Result<bool> {
        if self.confirm_discard_if_dirty()? == Decision::Abort {
            return Ok(false);
        }
        let Some(path) = self.dialogs.open_file() else {
            return Ok(false);
        };
        self.load_path(path)?;
        Ok(true)
    }

    /// Load the first file of a drag-and-drop payload. The guard runs
    /// before the drop replaces anything.
    pub fn open_dropped(&mut self, payload: &str) -> Result<bool> {
        let Some(path) = first_dropped_path(payload) else {
            return Ok(false);
        };
        if self.confirm_discard_if_dirty()? == Decision::Abort {
            return Ok(false);
        }
        self.load_path(path)?;
        Ok(true)
    }

    /// Write the buffer to the current path, prompting for a destination
    /// when there is none. Returns false when the destination prompt was
    /// cancelled; that abandons the save with no state change.
    pub fn file_save(&mut self) -> Result<bool> {
        let path = match self.current_path.clone() {
            Some(path) => path,
            None => match self.dialogs.save_file() {
                Some(path) => path,
                None => return Ok(false),
            },
        };

        let text = self.surface.text();
        fs::write(&path, &text).map_err(AppError::FileWrite)?;
        self.current_path = Some(path);
        self.mark_clean();
        Ok(true)
    }

    /// Forget the current path, then save; this forces a fresh destination
    /// prompt. The path stays forgotten even when that prompt is then
    /// cancelled, matching how the app has always behaved.
    pub fn file_save_as(&mut self) -> Result<bool> {
        self.current_path = None;
        self.file_save()
    }

    // --- Close sequence ---

    /// Handle the shell's close-intent signal: run the guard, then flush
    /// the window settings, then tell the shell whether it may terminate.
    ///
    /// Settings are written regardless of the decision; a failure to write
    /// them is logged and never blocks the close.
    pub fn handle_close_intent(
        &mut self,
        geometry: WindowGeometry,
        settings: &mut WindowSettings,
        store: &dyn SettingsStore,
        persist: bool,
    ) -> Result<Decision> {
        let decision = self.confirm_discard_if_dirty();

        if persist {
            settings.capture_geometry(&geometry);
            if let Err(e) = store.save(settings) {
                eprintln!("Failed to save window settings: {}", e);
            }
        }

        decision
    }

    fn load_path(&mut self, path: PathBuf) -> Result<()> {
        let content = fs::read_to_string(&path).map_err(AppError::FileRead)?;
        self.surface.set_text(&content);
        self.current_path = Some(path);
        self.mark_clean();
        Ok(())
    }
}

/// First usable path in a drag-and-drop payload. The payload is one path
/// or `file://` URI per line; URIs come percent-encoded on X11/Wayland.
pub fn first_dropped_path(payload: &str) -> Option<PathBuf> {
    let line = payload.lines().map(str::trim).find(|l| !l.is_empty())?;
    let stripped = line.strip_prefix("file://").unwrap_or(line);
    Some(PathBuf::from(percent_decode(stripped)))
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
