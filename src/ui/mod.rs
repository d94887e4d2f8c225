//! FLTK widgets, menus, native dialogs and theming.

pub mod about;
pub mod editor;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
