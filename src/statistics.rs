//! Player statistics, persisted as `Statistic.properties`

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::Properties;

const SHIPS_DESTRUCTION_STREAK: &str = "shipsDestructionStreak";
const PLAYED_GAME_NUMBER: &str = "playedGameNumber";
const CLEAR_ACHIEVEMENT_NUMBER: &str = "clearAchievementNumber";

/// Header comment written at the top of the file
const HEADER: &str = "#PlayerGameStatistics";

/// Lifetime statistics for the single local player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Longest run of enemy ships destroyed without a miss
    pub ships_destruction_streak: i32,
    /// Games started
    pub played_game_number: i32,
    /// Achievements cleared
    pub clear_achievement_number: i32,
}

impl Statistics {
    pub fn new(
        ships_destruction_streak: i32,
        played_game_number: i32,
        clear_achievement_number: i32,
    ) -> Self {
        Self {
            ships_destruction_streak,
            played_game_number,
            clear_achievement_number,
        }
    }
}

pub(crate) fn read_statistics<R: BufRead>(reader: R, origin: &str) -> Result<Statistics> {
    let props = Properties::read(reader, origin)?;
    Ok(Statistics {
        ships_destruction_streak: props.number(SHIPS_DESTRUCTION_STREAK)?,
        played_game_number: props.number(PLAYED_GAME_NUMBER)?,
        clear_achievement_number: props.number(CLEAR_ACHIEVEMENT_NUMBER)?,
    })
}

/// Only the first record is written; an empty slice leaves the keys out
pub(crate) fn write_statistics<W: Write + ?Sized>(
    out: &mut W,
    stats: &[Statistics],
) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    if let Some(stat) = stats.first() {
        writeln!(out, "{SHIPS_DESTRUCTION_STREAK}={}", stat.ships_destruction_streak)?;
        writeln!(out, "{PLAYED_GAME_NUMBER}={}", stat.played_game_number)?;
        writeln!(out, "{CLEAR_ACHIEVEMENT_NUMBER}={}", stat.clear_achievement_number)?;
    }
    Ok(())
}
