//! QuillPad - a small, no-frills notepad.
//!
//! The crate is split into two layers:
//!
//! - [`app`] - document session, unsaved-changes guard, close flow,
//!   window settings, word count. Everything here runs against capability
//!   traits and is tested without a window system.
//! - [`ui`] - FLTK widgets, menus, native dialogs and theming.

pub mod app;
pub mod ui;
