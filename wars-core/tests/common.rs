use wars_core::AnswerList;
use wars_types::{GameStage, PlayerRecord, PlayerScore};

/// Creates a record with only a name, as a player looks right after joining
pub fn create_joining_player(name: &str) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        board: String::new(),
        stage: GameStage::Waiting,
        score: None,
        rows_complete: 0,
        time_finished: None,
    }
}

/// Creates a mid-game record with the given outcome counts
pub fn create_scored_player(name: &str, correct: u32, present: u32, absent: u32) -> PlayerRecord {
    PlayerRecord {
        score: Some(PlayerScore {
            correct,
            present,
            absent,
        }),
        stage: GameStage::Playing,
        rows_complete: 1,
        ..create_joining_player(name)
    }
}

/// Creates a finished record: solved board, rows used, finish timestamp
pub fn create_finished_player(name: &str, rows_complete: u32, time_finished: i64) -> PlayerRecord {
    PlayerRecord {
        score: Some(PlayerScore {
            correct: 5,
            present: 0,
            absent: 0,
        }),
        stage: GameStage::Complete,
        rows_complete,
        time_finished: Some(time_finished),
        ..create_joining_player(name)
    }
}

/// Creates a small answer list with a known order
pub fn create_test_answers() -> AnswerList {
    AnswerList::from_text("crane\nslate\npride\naudio\nhouse\nmouse\ntrain\nplane\nwater\nstone")
}

/// Names of records in their current order
pub fn names(records: &[PlayerRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}
