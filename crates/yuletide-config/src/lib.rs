//! Configuration for the yuletide greeting card.
//!
//! The config file is TOML, read from `$YULETIDE_CONFIG` or the platform
//! config directory. A missing file is fine: every setting has a default and
//! a card book is built in.

mod file;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use directories::ProjectDirs;
use log::LevelFilter;
use ratatui::style::Color;
use yuletide_core::{CardBook, DEFAULT_ACCENT, UnlockDate, YearCard, parse_accent};

use crate::file::{BuiltinCards, CardFile, ConfigFile, FallbackFile};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "YULETIDE_CONFIG";

/// Frame rate bounds.
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 120;

const BUILTIN_CARDS: &str = include_str!("cards.toml");

/// Display settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Target frames per second.
    pub fps: u32,
    /// Whether the snow layer is shown.
    pub snow: bool,
    /// Virtual pixel width of a terminal cell.
    pub cell_width_px: f32,
    /// Virtual pixel height of a terminal cell.
    pub cell_height_px: f32,
}

/// Fully resolved and validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: LevelFilter,
    pub unlock: UnlockDate,
    pub display: DisplayConfig,
    pub cards: CardBook,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            snow: true,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let cards = resolve_cards(Vec::new(), None).unwrap_or_else(|err| {
            log::error!("built-in cards unusable: {err}");
            CardBook::new(Vec::new(), fallback_card("Merry Christmas"))
        });
        Self {
            log_level: LevelFilter::Info,
            unlock: UnlockDate::default(),
            display: DisplayConfig::default(),
            cards,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text).wrap_err("failed to parse config")?;

        let log_level = match file.log_level.as_deref() {
            Some(level) => LevelFilter::from_str(level)
                .map_err(|_| eyre!("unknown log level {level:?}"))?,
            None => LevelFilter::Info,
        };

        let unlock = UnlockDate::new(file.unlock.month, file.unlock.day).ok_or_else(|| {
            eyre!(
                "unlock date {}/{} is not a calendar date",
                file.unlock.month,
                file.unlock.day
            )
        })?;

        let display = file.display;
        let valid_cell = |px: f32| px.is_finite() && px >= 1.0;
        if !valid_cell(display.cell_width_px) || !valid_cell(display.cell_height_px) {
            bail!(
                "cell size {}x{} must be a finite size of at least 1x1 pixels",
                display.cell_width_px,
                display.cell_height_px
            );
        }
        let display = DisplayConfig {
            fps: display.fps.clamp(MIN_FPS, MAX_FPS),
            snow: display.snow,
            cell_width_px: display.cell_width_px,
            cell_height_px: display.cell_height_px,
        };

        let cards = resolve_cards(file.years, file.fallback)?;

        Ok(Self {
            log_level,
            unlock,
            display,
            cards,
        })
    }
}

/// Config file location: `$YULETIDE_CONFIG`, else `config.toml` in the
/// platform config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Log file location in the platform data directory.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("yuletide.log"))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "yuletide")
}

/// Merge configured cards with the built-in book.
///
/// The built-in years are used only when the file defines neither years nor
/// a fallback. A missing fallback always comes from the built-in book.
fn resolve_cards(years: Vec<CardFile>, fallback: Option<FallbackFile>) -> Result<CardBook> {
    let builtin: BuiltinCards =
        toml::from_str(BUILTIN_CARDS).wrap_err("failed to parse built-in cards")?;

    let years = if years.is_empty() && fallback.is_none() {
        builtin.years
    } else {
        years
    };
    let fallback = fallback.unwrap_or(builtin.fallback);

    let mut seen = HashSet::new();
    for card in &years {
        if !seen.insert(card.year) {
            bail!("duplicate card for year {}", card.year);
        }
    }

    let years = years
        .into_iter()
        .map(|card| YearCard {
            year: card.year,
            greeting: card.greeting,
            message: card.message,
            video_url: card.video_url.filter(|url| !url.trim().is_empty()),
            accent: accent_or_default(card.accent.as_deref()),
        })
        .collect();

    let fallback = YearCard {
        year: 0,
        accent: accent_or_default(fallback.accent.as_deref()),
        greeting: fallback.greeting,
        message: fallback.message,
        video_url: fallback.video_url.filter(|url| !url.trim().is_empty()),
    };

    Ok(CardBook::new(years, fallback))
}

fn fallback_card(greeting: &str) -> YearCard {
    YearCard {
        year: 0,
        greeting: greeting.to_string(),
        message: String::new(),
        video_url: None,
        accent: DEFAULT_ACCENT,
    }
}

fn accent_or_default(accent: Option<&str>) -> Color {
    match accent {
        None => DEFAULT_ACCENT,
        Some(value) => parse_accent(value).unwrap_or_else(|| {
            log::warn!("ignoring invalid accent color {value:?}");
            DEFAULT_ACCENT
        }),
    }
}
