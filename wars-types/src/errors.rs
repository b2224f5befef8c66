use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    NotAWord { word: String },
    NotAlphabetic { word: String },
    WrongLength { word: String, expected: u32 },
}
