//! Game font
//!
//! The bundled `font.ttf` is optional. Without it the renderer is handed a
//! generic serif family at the same size.

use std::fmt;

use ab_glyph::{FontArc, PxScale};

use crate::consts::FALLBACK_FONT_FAMILY;
use crate::error::{PersistenceError, Result};

/// Which face backs a [`GameFont`]
#[derive(Clone)]
pub enum FontFace {
    /// Parsed bundled outline font
    Outline(FontArc),
    /// Generic system family resolved by the renderer
    Generic(&'static str),
}

/// A font at a fixed point size
#[derive(Clone)]
pub struct GameFont {
    face: FontFace,
    size: f32,
}

impl fmt::Debug for GameFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match &self.face {
            FontFace::Outline(_) => "outline",
            FontFace::Generic(family) => *family,
        };
        f.debug_struct("GameFont")
            .field("face", &face)
            .field("size", &self.size)
            .finish()
    }
}

impl GameFont {
    /// Generic serif fallback
    pub fn fallback(size: f32) -> Result<Self> {
        Ok(Self {
            face: FontFace::Generic(FALLBACK_FONT_FAMILY),
            size: checked_size(size)?,
        })
    }

    /// Parse an outline font (TrueType/OpenType) at `size`
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self> {
        let size = checked_size(size)?;
        let font = FontArc::try_from_vec(data)?;
        Ok(Self {
            face: FontFace::Outline(font),
            size,
        })
    }

    /// Same face at another size
    pub fn derive(&self, size: f32) -> Result<Self> {
        Ok(Self {
            face: self.face.clone(),
            size: checked_size(size)?,
        })
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Glyph scale for rasterizing with `ab_glyph`
    pub fn scale(&self) -> PxScale {
        PxScale::from(self.size)
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// The parsed outline font, if the bundled one was loaded
    pub fn outline(&self) -> Option<&FontArc> {
        match &self.face {
            FontFace::Outline(font) => Some(font),
            FontFace::Generic(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.face, FontFace::Generic(_))
    }
}

fn checked_size(size: f32) -> Result<f32> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(PersistenceError::InvalidFontSize(size))
    }
}

/// Build the game font from the bundled resource, if there is one
pub(crate) fn font_from_resource(data: Option<Vec<u8>>, size: f32) -> Result<GameFont> {
    match data {
        Some(bytes) => GameFont::from_bytes(bytes, size),
        None => {
            log::warn!("Custom font not found, applying default font.");
            GameFont::fallback(size)
        }
    }
}
