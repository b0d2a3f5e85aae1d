//! Monochrome sprite bitmaps
//!
//! The bundled `graphics` resource is a bare stream of `0`/`1` characters.
//! It carries no sizes or kind tags, so frames are filled in the order they
//! were inserted into the [`SpriteMap`] and that order must match the order
//! the bitmaps were authored in. Any other character is a separator.

use serde::{Deserialize, Serialize};

use crate::error::{PersistenceError, Result};

/// Every sprite the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    /// Player ship
    Ship,
    /// Player ship after being hit
    ShipDestroyed,
    /// Player bullet
    Bullet,
    /// Enemy bullet
    EnemyBullet,
    /// First frame of enemy type A
    EnemyShipA1,
    /// Second frame of enemy type A
    EnemyShipA2,
    /// First frame of enemy type B
    EnemyShipB1,
    /// Second frame of enemy type B
    EnemyShipB2,
    /// First frame of enemy type C
    EnemyShipC1,
    /// Second frame of enemy type C
    EnemyShipC2,
    /// Bonus ship crossing the top of the screen
    EnemyShipSpecial,
    /// Enemy explosion
    Explosion,
}

impl SpriteKind {
    /// All kinds, in the order the bundled `graphics` resource was authored
    pub const ALL: [SpriteKind; 12] = [
        SpriteKind::Ship,
        SpriteKind::ShipDestroyed,
        SpriteKind::Bullet,
        SpriteKind::EnemyBullet,
        SpriteKind::EnemyShipA1,
        SpriteKind::EnemyShipA2,
        SpriteKind::EnemyShipB1,
        SpriteKind::EnemyShipB2,
        SpriteKind::EnemyShipC1,
        SpriteKind::EnemyShipC2,
        SpriteKind::EnemyShipSpecial,
        SpriteKind::Explosion,
    ];

    /// Frame shape as (rows, cols) in the bundled resource
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            SpriteKind::Ship | SpriteKind::ShipDestroyed => (13, 8),
            SpriteKind::Bullet | SpriteKind::EnemyBullet => (3, 5),
            SpriteKind::EnemyShipA1
            | SpriteKind::EnemyShipA2
            | SpriteKind::EnemyShipB1
            | SpriteKind::EnemyShipB2
            | SpriteKind::EnemyShipC1
            | SpriteKind::EnemyShipC2 => (12, 8),
            SpriteKind::EnemyShipSpecial => (16, 7),
            SpriteKind::Explosion => (13, 7),
        }
    }
}

/// A caller-sized boolean pixel matrix, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFrame {
    rows: usize,
    cols: usize,
    pixels: Vec<bool>,
}

impl SpriteFrame {
    /// Create an all-off frame
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            pixels: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at (row, col); panics when out of bounds, like slice indexing
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols, "pixel out of bounds");
        self.pixels[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, on: bool) {
        assert!(row < self.rows && col < self.cols, "pixel out of bounds");
        self.pixels[row * self.cols + col] = on;
    }

    /// One row of pixels
    pub fn row(&self, row: usize) -> &[bool] {
        &self.pixels[row * self.cols..(row + 1) * self.cols]
    }

    /// All pixels in reading order
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }
}

/// Insertion-ordered mapping of sprite kind to frame
#[derive(Debug, Clone, Default)]
pub struct SpriteMap {
    entries: Vec<(SpriteKind, SpriteFrame)>,
}

impl SpriteMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Every kind, pre-sized and in authored order, ready for loading
    pub fn standard() -> Self {
        let mut map = Self::new();
        for kind in SpriteKind::ALL {
            let (rows, cols) = kind.dimensions();
            map.insert(kind, SpriteFrame::new(rows, cols));
        }
        map
    }

    /// Insert a frame. Replacing an existing kind keeps its original position.
    pub fn insert(&mut self, kind: SpriteKind, frame: SpriteFrame) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, existing)) => *existing = frame,
            None => self.entries.push((kind, frame)),
        }
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&SpriteFrame> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, frame)| frame)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kinds in insertion order
    pub fn kinds(&self) -> impl Iterator<Item = SpriteKind> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpriteKind, &SpriteFrame)> {
        self.entries.iter().map(|(kind, frame)| (*kind, frame))
    }

    /// Total cells across every frame
    pub fn cell_count(&self) -> usize {
        self.entries.iter().map(|(_, frame)| frame.len()).sum()
    }
}

/// Fill every frame of `sprites` from a `0`/`1` stream.
///
/// Frames are untouched unless the stream holds enough pixels for all of them.
pub(crate) fn fill_sprites(sprites: &mut SpriteMap, data: &[u8], name: &str) -> Result<()> {
    let bits: Vec<bool> = data
        .iter()
        .filter_map(|byte| match byte {
            b'0' => Some(false),
            b'1' => Some(true),
            _ => None,
        })
        .collect();

    let needed = sprites.cell_count();
    if bits.len() < needed {
        return Err(PersistenceError::resource(
            name,
            format!("ended after {} pixels, {needed} required", bits.len()),
        ));
    }

    let mut bits = bits.into_iter();
    for (kind, frame) in sprites.entries.iter_mut() {
        for (pixel, bit) in frame.pixels.iter_mut().zip(bits.by_ref()) {
            *pixel = bit;
        }
        log::debug!("Sprite {kind:?} loaded.");
    }
    Ok(())
}
