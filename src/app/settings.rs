use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Normal,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Window placement as reported by the shell layer at close time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub maximized: bool,
}

/// The persisted settings blob: read once at startup, written back once
/// during the close sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_pos_x")]
    pub pos_x: i32,

    #[serde(default = "default_pos_y")]
    pub pos_y: i32,

    #[serde(default = "default_width")]
    pub width: i32,

    #[serde(default = "default_height")]
    pub height: i32,

    #[serde(default)]
    pub maximized: bool,

    #[serde(default)]
    pub theme: Theme,
}

fn default_pos_x() -> i32 {
    100
}

fn default_pos_y() -> i32 {
    100
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    620
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            pos_x: default_pos_x(),
            pos_y: default_pos_y(),
            width: default_width(),
            height: default_height(),
            maximized: false,
            theme: Theme::Normal,
        }
    }
}

impl WindowSettings {
    /// Fold the geometry captured at close time into the record.
    ///
    /// A maximized window only updates the `maximized` flag; the stored
    /// non-maximized placement is kept, so un-maximizing after a restart
    /// returns to the previous size.
    pub fn capture_geometry(&mut self, geometry: &WindowGeometry) {
        self.maximized = geometry.maximized;
        if !geometry.maximized {
            self.pos_x = geometry.x;
            self.pos_y = geometry.y;
            self.width = geometry.width;
            self.height = geometry.height;
        }
    }
}

/// Read/write access to the settings blob.
pub trait SettingsStore {
    fn load(&self) -> Result<WindowSettings, AppError>;
    fn save(&self, settings: &WindowSettings) -> Result<(), AppError>;
}

/// JSON-on-disk settings store, one record per file.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform config location,
    /// e.g. `~/.config/quillpad/settings.json`.
    pub fn at_default_location() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("quillpad");
        path.push("settings.json");
        Self { path }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<WindowSettings, AppError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, settings: &WindowSettings) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Load settings, falling back to defaults when the blob is missing or
/// unreadable. A corrupt record must never prevent startup.
pub fn load_or_default(store: &dyn SettingsStore) -> WindowSettings {
    match store.load() {
        Ok(settings) => settings,
        Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            WindowSettings::default()
        }
        Err(e) => {
            eprintln!("Failed to load window settings: {}. Using defaults.", e);
            WindowSettings::default()
        }
    }
}

/// Switches unifying the two historical application variants (a plain one
/// and a themed, settings-persisting one). The default build enables
/// everything.
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub framed: bool,
    pub persist_settings: bool,
    pub theming: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            framed: true,
            persist_settings: true,
            theming: true,
        }
    }
}
