use std::path::PathBuf;

use fltk::dialog::{self, FileDialogType, NativeFileChooser};

use crate::app::dialogs::{ConfirmDialog, FileDialogs, SaveChoice};
use crate::app::file_filters::text_files_filter;

/// Native FLTK implementations of the dialog capabilities.
pub struct NativeDialogs;

impl FileDialogs for NativeDialogs {
    fn open_file(&mut self) -> Option<PathBuf> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
        nfc.set_filter(&text_files_filter());
        nfc.show(); // blocks until close
        let filename = nfc.filename();
        if filename.as_os_str().is_empty() {
            None
        } else {
            Some(filename)
        }
    }

    fn save_file(&mut self) -> Option<PathBuf> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
        nfc.set_filter(&text_files_filter());
        nfc.show(); // blocks until close
        let filename = nfc.filename();
        if filename.as_os_str().is_empty() {
            None
        } else {
            Some(filename)
        }
    }
}

impl ConfirmDialog for NativeDialogs {
    fn ask_save_changes(&mut self) -> SaveChoice {
        let choice = dialog::choice2_default(
            "You have unsaved changes.\nSave the current document?",
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => SaveChoice::Save,
            Some(1) => SaveChoice::Discard,
            // Closing the dialog counts as Cancel.
            _ => SaveChoice::Cancel,
        }
    }
}
