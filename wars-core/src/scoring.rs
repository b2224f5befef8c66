use std::collections::HashMap;

use wars_types::{Board, BoardRow, LetterCell, LetterState, LettersGuessed, PlayerScore};

pub struct BoardScoring;

impl BoardScoring {
    /// Evaluate a guess against the answer word.
    ///
    /// Two passes: exact positions first, which consume that letter's
    /// budget, then misplaced letters while any budget remains. A letter
    /// is never marked more times than the answer contains it.
    pub fn evaluate_guess(guess: &str, answer: &str) -> BoardRow {
        let guess_chars: Vec<char> = guess.to_lowercase().chars().collect();
        let answer_chars: Vec<char> = answer.to_lowercase().chars().collect();

        let mut remaining: HashMap<char, u32> = HashMap::new();
        for &ch in &answer_chars {
            *remaining.entry(ch).or_insert(0) += 1;
        }

        let mut row: BoardRow = guess_chars
            .iter()
            .map(|&ch| LetterCell {
                letter: ch.to_string(),
                state: LetterState::Absent,
            })
            .collect();

        for (i, &ch) in guess_chars.iter().enumerate() {
            if answer_chars.get(i) == Some(&ch) {
                row[i].state = LetterState::Correct;
                if let Some(count) = remaining.get_mut(&ch) {
                    *count -= 1;
                }
            }
        }

        for (i, &ch) in guess_chars.iter().enumerate() {
            if row[i].state == LetterState::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&ch) {
                if *count > 0 {
                    *count -= 1;
                    row[i].state = LetterState::Present;
                }
            }
        }

        row
    }

    /// Outcome counts for a single evaluated row.
    pub fn score_row(row: &[LetterCell]) -> PlayerScore {
        let mut score = PlayerScore {
            correct: 0,
            present: 0,
            absent: 0,
        };
        for cell in row {
            match cell.state {
                LetterState::Correct => score.correct += 1,
                LetterState::Present => score.present += 1,
                LetterState::Absent => score.absent += 1,
                LetterState::Initial => {}
            }
        }
        score
    }

    /// A player's current standing: the latest fully evaluated row.
    /// `None` until the first guess lands.
    pub fn board_score(board: &Board) -> Option<PlayerScore> {
        board
            .iter()
            .rev()
            .find(|row| !row.is_empty() && row.iter().all(|c| c.state != LetterState::Initial))
            .map(|row| Self::score_row(row))
    }

    /// Fold a freshly evaluated row into the keyboard map.
    /// A key's state only upgrades: Correct > Present > Absent > Initial.
    pub fn merge_letters_guessed(letters: &mut LettersGuessed, row: &[LetterCell]) {
        for cell in row {
            if cell.letter.is_empty() {
                continue;
            }
            let current = letters
                .get(&cell.letter)
                .copied()
                .unwrap_or(LetterState::Initial);
            if state_rank(cell.state) > state_rank(current) {
                letters.insert(cell.letter.clone(), cell.state);
            }
        }
    }
}

fn state_rank(state: LetterState) -> u8 {
    match state {
        LetterState::Initial => 0,
        LetterState::Absent => 1,
        LetterState::Present => 2,
        LetterState::Correct => 3,
    }
}
