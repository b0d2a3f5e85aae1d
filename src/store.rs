//! The persistence service
//!
//! Every user-data load follows the same rule: read the user file next to
//! the game; if it does not exist, read the bundled default of the same
//! name. Only "not found" falls back. Anything else, including a file that
//! exists but does not parse, is returned to the caller.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::base_dir::{BaseDirectory, ExecutableDir};
use crate::consts::{CURRENCY_FILE, FONT_RESOURCE, SCORES_FILE, SPRITE_RESOURCE, STATISTICS_FILE};
use crate::currency::{read_currency, write_currency};
use crate::error::{PersistenceError, Result};
use crate::font::{GameFont, font_from_resource};
use crate::highscores::{Score, read_scores, sort_scores, write_scores};
use crate::resources::{EmbeddedResources, ResourceSource};
use crate::sprites::{SpriteMap, fill_sprites};
use crate::statistics::{Statistics, read_statistics, write_statistics};

/// Loads bundled assets and loads/saves user data next to the game.
///
/// Holds nothing but its two strategies; every call resolves paths afresh.
#[derive(Debug, Clone, Default)]
pub struct PersistenceStore<B = ExecutableDir, R = EmbeddedResources> {
    base: B,
    resources: R,
}

impl PersistenceStore {
    /// User files next to the executable, defaults compiled in
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: BaseDirectory, R: ResourceSource> PersistenceStore<B, R> {
    pub fn with_sources(base: B, resources: R) -> Self {
        Self { base, resources }
    }

    /// Directory user files are written to
    pub fn base_dir(&self) -> Result<PathBuf> {
        self.base.resolve()
    }

    /// Full path of a user file
    pub fn user_file(&self, name: &str) -> Result<PathBuf> {
        Ok(self.base_dir()?.join(name))
    }

    /// Fill every frame in `sprites` from the bundled `graphics` resource.
    ///
    /// There is no fallback: a missing or short resource is a packaging error.
    pub fn load_sprites(&self, sprites: &mut SpriteMap) -> Result<()> {
        let data = self.bundled(SPRITE_RESOURCE)?;
        fill_sprites(sprites, &data, SPRITE_RESOURCE)
    }

    /// Load the bundled font at `size`, or a generic serif face if none is bundled
    pub fn load_font(&self, size: f32) -> Result<GameFont> {
        let data = self.resources.read(FONT_RESOURCE)?;
        font_from_resource(data, size)
    }

    /// High scores, best first
    pub fn load_high_scores(&self) -> Result<Vec<Score>> {
        let mut scores = self.load_with_fallback(SCORES_FILE, "high scores", |reader, origin| {
            read_scores(reader, origin)
        })?;
        sort_scores(&mut scores);
        Ok(scores)
    }

    /// Overwrite the scores file with at most the first seven entries, as ordered
    pub fn save_high_scores(&self, scores: &[Score]) -> Result<()> {
        self.save_user_file(SCORES_FILE, "high scores", |out| write_scores(out, scores))
    }

    pub fn load_statistics(&self) -> Result<Statistics> {
        self.load_with_fallback(STATISTICS_FILE, "statistics", |reader, origin| {
            read_statistics(reader, origin)
        })
    }

    /// Persist the first record of `stats`
    pub fn save_statistics(&self, stats: &[Statistics]) -> Result<()> {
        self.save_user_file(STATISTICS_FILE, "statistics", |out| {
            write_statistics(out, stats)
        })
    }

    pub fn load_currency(&self) -> Result<u32> {
        self.load_with_fallback(CURRENCY_FILE, "currency", |reader, origin| {
            read_currency(reader, origin)
        })
    }

    pub fn save_currency(&self, balance: u32) -> Result<()> {
        self.save_user_file(CURRENCY_FILE, "currency", |out| write_currency(out, balance))
    }

    /// Parse the user file `name`, or the bundled resource of the same name
    /// when the user file does not exist.
    fn load_with_fallback<T>(
        &self,
        name: &str,
        what: &str,
        parse: impl Fn(&mut dyn BufRead, &str) -> Result<T>,
    ) -> Result<T> {
        let path = self.user_file(name)?;
        match File::open(&path) {
            Ok(file) => {
                log::info!("Loading user {what}.");
                let origin = path.display().to_string();
                parse(&mut BufReader::new(file), &origin)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Loading default {what}.");
                let data = self.bundled(name)?;
                parse(&mut data.as_slice(), name)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Truncate (or create) the user file `name` and write it in full
    fn save_user_file(
        &self,
        name: &str,
        what: &str,
        write: impl FnOnce(&mut dyn Write) -> io::Result<()>,
    ) -> Result<()> {
        let path = self.user_file(name)?;
        log::debug!("Saving {what} to {}", path.display());
        let mut out = BufWriter::new(File::create(&path)?);
        write(&mut out)?;
        out.flush()?;
        log::info!("Saving user {what}.");
        Ok(())
    }

    fn bundled(&self, name: &str) -> Result<Vec<u8>> {
        self.resources
            .read(name)?
            .ok_or_else(|| PersistenceError::resource(name, "not bundled"))
    }
}
