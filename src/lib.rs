//! Arcade Store - local persistence for a single-player arcade shooter
//!
//! Core modules:
//! - `store`: The persistence service (user file first, bundled default second)
//! - `sprites`: Monochrome sprite bitmaps from the bundled `graphics` resource
//! - `font`: Bundled outline font with a generic serif fallback
//! - `highscores`: Top 7 leaderboard in the five-lines-per-record format
//! - `statistics`: Player statistics as `key=value` properties
//! - `currency`: In-game currency balance
//! - `base_dir`: Where user files live (next to the installed program)
//! - `resources`: Read-only defaults shipped with the program

pub mod base_dir;
mod currency;
pub mod error;
pub mod font;
mod format;
pub mod highscores;
pub mod resources;
pub mod sprites;
pub mod statistics;
pub mod store;

pub use base_dir::{BaseDirectory, ExecutableDir, FixedDir, InstallLocation};
pub use error::{PersistenceError, Result};
pub use font::{FontFace, GameFont};
pub use highscores::{HighScores, Score};
pub use resources::{DirResources, EmbeddedResources, ResourceSource};
pub use sprites::{SpriteFrame, SpriteKind, SpriteMap};
pub use statistics::Statistics;
pub use store::PersistenceStore;

/// File names and limits
pub mod consts {
    /// Maximum number of high scores persisted
    pub const MAX_SCORES: usize = 7;

    /// User scores file, and the bundled default of the same name
    pub const SCORES_FILE: &str = "scores";
    /// User statistics file, and the bundled default of the same name
    pub const STATISTICS_FILE: &str = "Statistic.properties";
    /// User currency file, and the bundled default of the same name
    pub const CURRENCY_FILE: &str = "currency";

    /// Bundled sprite bitmaps
    pub const SPRITE_RESOURCE: &str = "graphics";
    /// Bundled outline font (optional)
    pub const FONT_RESOURCE: &str = "font.ttf";
    /// Family used when no font is bundled
    pub const FALLBACK_FONT_FAMILY: &str = "Serif";
}
