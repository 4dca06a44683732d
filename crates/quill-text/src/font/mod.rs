pub mod face;
pub mod loader;
pub mod metrics;
pub mod provider;

pub use face::FontFace;
pub use loader::{FontCache, FontKey, load_system_default_font};
pub use metrics::{FontMetrics, LineMetrics, ScaledFontMetrics};
pub use provider::{Font, FontProvider, MonospaceFont};

use thiserror::Error;

/// Errors that can occur while loading fonts.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid font data")]
    InvalidFont,

    #[error("no usable system font found")]
    NoSystemFont,
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;
