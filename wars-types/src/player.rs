use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::GameStage;

/// Counts of letter-guess outcomes across a player's current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerScore {
    pub correct: u32,
    pub present: u32,
    pub absent: u32,
}

/// Snapshot of one player's visible state in a shared session.
///
/// Each record is written only by its owning player's client and observed
/// read-only by everyone else. `score` is absent until the player has an
/// evaluated row, `time_finished` until they finish their board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerRecord {
    pub name: String,
    pub board: String,
    pub stage: GameStage,
    pub score: Option<PlayerScore>,
    pub rows_complete: u32,
    pub time_finished: Option<i64>, // epoch millis
}
