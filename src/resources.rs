//! Bundled read-only resources
//!
//! Defaults ship with the program. `Ok(None)` means the resource is not
//! bundled at all; each caller decides whether that is fatal.

use std::io;
use std::path::PathBuf;

use crate::consts::{CURRENCY_FILE, SCORES_FILE, SPRITE_RESOURCE, STATISTICS_FILE};

/// Source of bundled resources, looked up by file name
pub trait ResourceSource {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Resources compiled into the binary from `assets/`
///
/// No font is embedded; font loading falls back to the generic serif face.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    const GRAPHICS: &'static [u8] = include_bytes!("../assets/graphics");
    const SCORES: &'static [u8] = include_bytes!("../assets/scores");
    const STATISTICS: &'static [u8] = include_bytes!("../assets/Statistic.properties");
    const CURRENCY: &'static [u8] = include_bytes!("../assets/currency");

    fn lookup(name: &str) -> Option<&'static [u8]> {
        match name {
            SPRITE_RESOURCE => Some(Self::GRAPHICS),
            SCORES_FILE => Some(Self::SCORES),
            STATISTICS_FILE => Some(Self::STATISTICS),
            CURRENCY_FILE => Some(Self::CURRENCY),
            _ => None,
        }
    }
}

impl ResourceSource for EmbeddedResources {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(Self::lookup(name).map(<[u8]>::to_vec))
    }
}

/// Resources read from an asset directory shipped alongside the program
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceSource for DirResources {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(self.root.join(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
