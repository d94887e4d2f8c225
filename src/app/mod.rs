//! Application layer.
//!
//! # Structure
//!
//! - `session` - document state, file commands and the unsaved-changes guard
//! - `shell` - the two-phase window-close state machine
//! - `settings` - persisted window geometry and theme
//! - `word_count` - the mixed CJK/Latin word counter
//! - `dialogs` - capability traits implemented by the ui layer
//! - `state` - main application coordinator

pub mod dialogs;
pub mod error;
pub mod file_filters;
pub mod messages;
pub mod session;
pub mod settings;
pub mod shell;
pub mod state;
pub mod word_count;

// Re-exports for convenient external access
pub use error::AppError;
pub use messages::Message;
pub use session::{Decision, DocumentSession};
pub use settings::{AppOptions, Theme, WindowSettings};
pub use shell::{CloseFlow, CloseState};
pub use word_count::count_words;
