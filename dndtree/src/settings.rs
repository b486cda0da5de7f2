use std::fs;
use std::path::{Path, PathBuf};

use dndtree_ui_editor::EditorProps;
use iced::Theme;
use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Palette the demo window starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub(crate) fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WindowSize {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 800.0,
        }
    }
}

/// Persisted demo settings. Every field is optional on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) theme: ThemeChoice,
    pub(crate) window: WindowSize,
    pub(crate) editor: EditorProps,
}

impl Settings {
    /// Reject values the editor cannot render with.
    pub(crate) fn validate(&self) -> Result<(), SettingsError> {
        let width = self.editor.indentation_width;
        if !width.is_finite() || width <= 0.0 {
            return Err(SettingsError::Validation {
                message: format!(
                    "indentation_width must be a positive number, got {width}"
                ),
            });
        }

        let WindowSize { width, height } = self.window;
        if !(width >= MIN_WINDOW_WIDTH && height >= MIN_WINDOW_HEIGHT) {
            return Err(SettingsError::Validation {
                message: format!(
                    "window must be at least \
                     {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}, got \
                     {width}x{height}"
                ),
            });
        }

        Ok(())
    }
}

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: Settings,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    fn new(settings: Settings, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    pub(crate) fn into_parts(self) -> (Settings, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

/// Load settings from `path`, or from the default location.
///
/// Unreadable or invalid files yield the defaults with a warning.
pub(crate) fn load_initial_settings(path: Option<&Path>) -> Settings {
    let path = path.map_or_else(settings_path, Path::to_path_buf);

    match load_settings_from_path(&path) {
        Ok(load) => {
            let (settings, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => {
                    log::info!("settings loaded from {}", path.display());
                },
                SettingsLoadStatus::Missing => {
                    log::debug!("no settings at {}", path.display());
                },
                SettingsLoadStatus::Invalid(message) => {
                    log::warn!(
                        "settings at {} ignored, using defaults: {message}",
                        path.display()
                    );
                },
            }
            settings
        },
        Err(err) => {
            log::warn!("settings load failed, using defaults: {err}");
            Settings::default()
        },
    }
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                Settings::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match parse_settings(&data) {
        Ok(settings) => {
            Ok(SettingsLoad::new(settings, SettingsLoadStatus::Loaded))
        },
        Err(err) => Ok(SettingsLoad::new(
            Settings::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn parse_settings(data: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = serde_json::from_str(data)?;
    settings.validate()?;
    Ok(settings)
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("dndtree")
            .join("settings.json");
    }

    std::env::temp_dir().join("dndtree").join("settings.json")
}
