use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuButton, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::settings::AppOptions;

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    options: &AppOptions,
    initial_dark_mode: bool,
) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Exit", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileExit) });

    // Edit - everything here is handled by the text widget itself
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Redo", Shortcut::Ctrl | 'y', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Delete", Shortcut::Ctrl | 'd', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditDelete) });
    menu.add("Edit/Select All", Shortcut::Ctrl | 'a', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SelectAll) });

    // View
    if options.theming {
        let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
        menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    }

    // Help
    menu.add("Help/About QuillPad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Right-click menu over the editor: the same edit operations as the
/// menu bar. No shortcuts here - the menu bar already owns them.
pub fn build_context_menu(menu: &mut MenuButton, sender: &Sender<Message>) {
    let s = sender;

    menu.add("Undo", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Redo", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Cut", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Copy", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Paste", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Delete", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditDelete) });
    menu.add("Select All", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SelectAll) });
}
