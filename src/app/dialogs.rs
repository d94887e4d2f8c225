use std::path::PathBuf;

/// What the user picked in the unsaved-changes prompt. Dismissing the
/// dialog without choosing is reported as `Cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// Native open/save dialogs. `None` means the user cancelled.
pub trait FileDialogs {
    fn open_file(&mut self) -> Option<PathBuf>;
    fn save_file(&mut self) -> Option<PathBuf>;
}

/// The three-way unsaved-changes prompt of the guard protocol.
pub trait ConfirmDialog {
    fn ask_save_changes(&mut self) -> SaveChoice;
}
