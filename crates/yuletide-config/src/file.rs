//! On-disk TOML layout.

use serde::Deserialize;

/// Root of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub log_level: Option<String>,
    pub unlock: UnlockFile,
    pub display: DisplayFile,
    pub years: Vec<CardFile>,
    pub fallback: Option<FallbackFile>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct UnlockFile {
    pub month: u32,
    pub day: u32,
}

impl Default for UnlockFile {
    fn default() -> Self {
        Self { month: 12, day: 25 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DisplayFile {
    pub fps: u32,
    pub snow: bool,
    pub cell_width_px: f32,
    pub cell_height_px: f32,
}

impl Default for DisplayFile {
    fn default() -> Self {
        Self {
            fps: 60,
            snow: true,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CardFile {
    pub year: i32,
    pub greeting: String,
    pub message: String,
    pub video_url: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FallbackFile {
    pub greeting: String,
    pub message: String,
    pub video_url: Option<String>,
    pub accent: Option<String>,
}

/// The card book shipped with the binary.
#[derive(Debug, Deserialize)]
pub(crate) struct BuiltinCards {
    pub years: Vec<CardFile>,
    pub fallback: FallbackFile,
}
