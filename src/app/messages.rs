/// All messages that can be sent through the FLTK channel.
/// Each menu, window or editor callback sends one of these; the dispatch
/// loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileExit,
    /// Close-intent signal: a window close was intercepted and must go
    /// through the guard before anything is torn down.
    WindowClose,
    /// Raw drag-and-drop payload dropped onto the editor.
    FileDropped(String),

    // Edit - delegated to the text widget
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    EditDelete,
    SelectAll,

    // View
    ToggleDarkMode,

    // Help
    ShowAbout,

    /// The text buffer changed; refresh title and word count.
    BufferModified,
}
