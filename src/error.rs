//! Error type shared by every store operation

use thiserror::Error;

/// Everything that can go wrong while loading or saving game data.
///
/// A missing user file is never reported here: it triggers the bundled
/// default instead. Malformed content always surfaces as [`PersistenceError::Parse`].
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("could not resolve the install directory: {0}")]
    PathResolution(String),
    #[error("bundled resource `{name}` could not be loaded: {reason}")]
    ResourceLoad { name: String, reason: String },
    #[error("bundled font is not a valid outline font")]
    FontFormat(#[from] ab_glyph::InvalidFont),
    #[error("font size must be a positive number, got {0}")]
    InvalidFontSize(f32),
    #[error("{origin}:{line}: {reason}")]
    Parse {
        origin: String,
        line: usize,
        reason: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

impl PersistenceError {
    pub(crate) fn parse(origin: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn resource(name: &str, reason: impl Into<String>) -> Self {
        Self::ResourceLoad {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the error came from malformed file content
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
