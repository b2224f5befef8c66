use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Initial, // Tile not yet evaluated
    Correct, // Right letter, right position
    Present, // Right letter, wrong position
    Absent,  // Letter not in the word
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LetterCell {
    pub letter: String,
    pub state: LetterState,
}

pub type BoardRow = Vec<LetterCell>;
pub type Board = Vec<BoardRow>;

/// Best evaluation seen so far for each letter, keyed by the letter itself.
/// Drives the on-screen keyboard coloring.
pub type LettersGuessed = HashMap<String, LetterState>;

/// Build a single-row board spelling out `word` with a uniform state.
pub fn word_to_board(word: &str, state: LetterState) -> Board {
    vec![
        word.chars()
            .map(|letter| LetterCell {
                letter: letter.to_string(),
                state,
            })
            .collect(),
    ]
}
