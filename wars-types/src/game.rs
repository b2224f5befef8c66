use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GameStage {
    Connecting, // Joining the shared room
    Intro,      // Entering a display name
    Waiting,    // Waiting for other players to be ready
    Ready,      // Ready, countdown to start
    Playing,    // Solving the board
    Complete,   // Own board finished, others may still be playing
    Scores,     // Everyone done, final standings shown
}

/// The day's answer, derived from the calendar date. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordOfDay {
    pub answer: String,
    pub answer_day: u32, // 1-based day number for display
}
