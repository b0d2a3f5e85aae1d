//! High score leaderboard system
//!
//! Persisted next to the game as the `scores` file, tracks top 7 scores.
//! Each entry is five lines: name, score, bullets shot, ships destroyed, level.

use std::cmp::Ordering;
use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SCORES;
use crate::error::Result;
use crate::format::LineReader;
use crate::store::PersistenceStore;
use crate::{BaseDirectory, ResourceSource};

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Player's name
    pub name: String,
    /// Player's score
    pub score: i32,
    /// Bullets fired during the run
    pub bullets_shot: i32,
    /// Enemy ships destroyed during the run
    pub ships_destroyed: i32,
    /// Level reached
    pub level: i32,
}

impl Score {
    pub fn new(
        name: impl Into<String>,
        score: i32,
        bullets_shot: i32,
        ships_destroyed: i32,
        level: i32,
    ) -> Self {
        Self {
            name: name.into(),
            score,
            bullets_shot,
            ships_destroyed,
            level,
        }
    }

    /// Leaderboard order: higher score first
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score)
    }
}

/// Sort scores best first, keeping the file order of equal scores
pub fn sort_scores(scores: &mut [Score]) {
    scores.sort_by(Score::rank_cmp);
}

/// Parse score records until a name line cannot be read
pub(crate) fn read_scores<R: BufRead>(reader: R, origin: &str) -> Result<Vec<Score>> {
    let mut lines = LineReader::new(reader, origin);
    let mut scores = Vec::new();

    loop {
        let name = match lines.next_line()? {
            Some(name) => name.to_string(),
            None => break,
        };
        let score = lines.required_number("score")?;
        let bullets_shot = lines.required_number("bulletsShot")?;
        let ships_destroyed = lines.required_number("shipsDestroyed")?;
        let level = lines.required_number("level")?;
        scores.push(Score {
            name,
            score,
            bullets_shot,
            ships_destroyed,
            level,
        });
    }

    Ok(scores)
}

/// Write the first [`MAX_SCORES`] records in the order given
pub(crate) fn write_scores<W: Write + ?Sized>(out: &mut W, scores: &[Score]) -> io::Result<()> {
    for score in scores.iter().take(MAX_SCORES) {
        writeln!(out, "{}", score.name)?;
        writeln!(out, "{}", score.score)?;
        writeln!(out, "{}", score.bullets_shot)?;
        writeln!(out, "{}", score.ships_destroyed)?;
        writeln!(out, "{}", score.level)?;
    }
    Ok(())
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<Score>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wrap already loaded scores, sorting and trimming them
    pub fn from_scores(mut entries: Vec<Score>) -> Self {
        sort_scores(&mut entries);
        entries.truncate(MAX_SCORES);
        Self { entries }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: i32) -> bool {
        if score <= 0 {
            return false;
        }
        if self.entries.len() < MAX_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: i32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, entry: Score) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| entry.score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<i32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the leaderboard, falling back to the bundled defaults
    pub fn load<B: BaseDirectory, R: ResourceSource>(store: &PersistenceStore<B, R>) -> Result<Self> {
        let scores = store.load_high_scores()?;
        log::info!("Loaded {} high scores", scores.len());
        Ok(Self::from_scores(scores))
    }

    /// Save the leaderboard next to the game
    pub fn save<B: BaseDirectory, R: ResourceSource>(
        &self,
        store: &PersistenceStore<B, R>,
    ) -> Result<()> {
        store.save_high_scores(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistenceError;
    use proptest::prelude::*;

    fn board(scores: &[i32]) -> HighScores {
        HighScores::from_scores(
            scores
                .iter()
                .map(|s| Score::new(format!("P{s}"), *s, 0, 0, 1))
                .collect(),
        )
    }

    #[test]
    fn test_read_five_line_records() {
        let text = "Roberto\n2500\n120\n60\n5\nAlice\n2100\n110\n52\n4\n";
        let scores = read_scores(text.as_bytes(), "scores").unwrap();
        assert_eq!(
            scores,
            vec![
                Score::new("Roberto", 2500, 120, 60, 5),
                Score::new("Alice", 2100, 110, 52, 4),
            ]
        );
    }

    #[test]
    fn test_read_empty_is_empty() {
        assert!(read_scores(&b""[..], "scores").unwrap().is_empty());
    }

    #[test]
    fn test_truncated_record_fails() {
        let text = "Roberto\n2500\n120\n";
        let err = read_scores(text.as_bytes(), "scores").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("missing shipsDestroyed"));
    }

    #[test]
    fn test_name_without_score_fails() {
        let err = read_scores(&b"Roberto\n"[..], "scores").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_invalid_number_fails() {
        let text = "Roberto\n25OO\n120\n60\n5\n";
        match read_scores(text.as_bytes(), "scores").unwrap_err() {
            PersistenceError::Parse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("25OO"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_write_caps_at_seven_in_given_order() {
        let scores: Vec<_> = (0..9).map(|i| Score::new(format!("P{i}"), i, 1, 2, 3)).collect();
        let mut out = Vec::new();
        write_scores(&mut out, &scores).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), MAX_SCORES * 5);
        assert!(text.starts_with("P0\n0\n1\n2\n3\nP1\n1\n"));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut scores = vec![
            Score::new("a", 10, 0, 0, 1),
            Score::new("b", 30, 0, 0, 1),
            Score::new("c", 10, 0, 0, 1),
        ];
        sort_scores(&mut scores);
        let names: Vec<_> = scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_qualifies() {
        let scores = board(&[700, 600, 500, 400, 300, 200, 100]);
        assert!(!scores.qualifies(0));
        assert!(!scores.qualifies(100));
        assert!(scores.qualifies(101));
        assert!(board(&[500]).qualifies(1));
    }

    #[test]
    fn test_potential_rank() {
        let scores = board(&[300, 200, 100]);
        assert_eq!(scores.potential_rank(400), Some(1));
        assert_eq!(scores.potential_rank(150), Some(3));
        assert_eq!(scores.potential_rank(50), Some(4));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_add_score_keeps_order_and_cap() {
        let mut scores = board(&[700, 600, 500, 400, 300, 200, 100]);
        let rank = scores.add_score(Score::new("new", 450, 10, 5, 2));
        assert_eq!(rank, Some(4));
        assert_eq!(scores.entries.len(), MAX_SCORES);
        assert_eq!(scores.entries[3].name, "new");
        assert_eq!(scores.entries.last().map(|e| e.score), Some(200));
        assert_eq!(scores.top_score(), Some(700));

        assert_eq!(scores.add_score(Score::new("low", 150, 0, 0, 1)), None);
    }

    #[test]
    fn test_from_scores_sorts_and_trims() {
        let scores = board(&[1, 9, 3, 8, 2, 7, 4, 6, 5]);
        let ranked: Vec<_> = scores.entries.iter().map(|s| s.score).collect();
        assert_eq!(ranked, [9, 8, 7, 6, 5, 4, 3]);
    }

    proptest! {
        #[test]
        fn prop_records_survive_the_file_format(
            name in "[^\r\n]{0,16}",
            score in any::<i32>(),
            bullets in any::<i32>(),
            ships in any::<i32>(),
            level in any::<i32>(),
        ) {
            let original = vec![Score::new(name, score, bullets, ships, level)];
            let mut out = Vec::new();
            write_scores(&mut out, &original).unwrap();
            let reread = read_scores(out.as_slice(), "scores").unwrap();
            prop_assert_eq!(reread, original);
        }
    }
}
