//! Quill configuration
//!
//! Settings come from `quill.toml` in the working directory, with
//! environment variables layered on top for one-off overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "quill.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct QuillConfig {
    /// Font and text handling
    pub text: TextConfig,
    /// Text box appearance
    pub text_box: TextBoxConfig,
    /// Editing behaviour
    pub editing: EditingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Path to a font file (.ttf/.otf); the system sans-serif face otherwise
    pub font: Option<PathBuf>,
    /// Face index inside a font collection
    pub font_index: u32,
    /// Text size in pixels
    pub text_size: f32,
    /// Turn tabs into spaces when text is set
    pub replace_tabs: bool,
}

/// Colours are `#rrggbb` strings; unset fields keep the built-in look.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TextBoxConfig {
    pub background: Option<String>,
    pub border: Option<String>,
    pub focus_border: Option<String>,
    pub text: Option<String>,
    pub placeholder: Option<String>,
    pub selection: Option<String>,
    pub caret: Option<String>,
    pub corner_radius: Option<f32>,
    pub padding: Option<f32>,
    /// Draw a drop shadow under the box
    pub shadow: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditingConfig {
    /// Mask the text as a password
    pub password: bool,
    /// Horizontal alignment: "left", "center" or "right"
    pub alignment: String,
    /// Blink the caret while focused
    pub caret_blink: bool,
    /// Seconds between caret blink toggles
    pub blink_interval: f32,
    /// Text shown while the box is empty and unfocused
    pub placeholder: Option<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            font_index: 0,
            text_size: 16.0,
            replace_tabs: true,
        }
    }
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            password: false,
            alignment: "left".to_string(),
            caret_blink: true,
            blink_interval: 0.5,
            placeholder: None,
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl QuillConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// `quill.toml` from the working directory, or defaults. A missing file
    /// is normal; a broken one is reported and ignored.
    pub fn load_or_default() -> Self {
        if !Path::new(CONFIG_FILE).exists() {
            return Self::default();
        }
        Self::load_from_file(CONFIG_FILE).unwrap_or_else(|err| {
            warn!(%err, "ignoring {CONFIG_FILE}");
            Self::default()
        })
    }

    /// Apply environment overrides from the process environment.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`. Values that fail to parse are skipped.
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(font) = lookup("QUILL_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Some(val) = lookup("QUILL_TEXT_SIZE") {
            match val.parse::<f32>() {
                Ok(size) if size > 0.0 => self.text.text_size = size,
                _ => warn!(value = %val, "QUILL_TEXT_SIZE is not a positive number"),
            }
        }
        if let Some(val) = lookup("QUILL_PASSWORD") {
            self.editing.password = parse_flag(&val);
        }
        if let Some(val) = lookup("QUILL_ALIGN") {
            self.editing.alignment = val;
        }
        if let Some(val) = lookup("QUILL_CARET_BLINK") {
            self.editing.caret_blink = parse_flag(&val);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from quill.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
