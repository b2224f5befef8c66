use wars_types::GameError;

/// Ordered list of daily answers.
///
/// Unlike a plain dictionary, order matters here: a word's position decides
/// which calendar day it appears on.
#[derive(Debug, Clone)]
pub struct AnswerList {
    words: Vec<String>,
}

impl AnswerList {
    /// Parse a newline-separated word list, keeping order.
    /// Blank lines and `#` comments are skipped.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|word| word.to_lowercase())
            .collect();

        Self { words }
    }

    /// The answer list compiled into the build.
    pub fn bundled() -> Self {
        Self::from_text(include_str!("../words/answers.txt"))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.iter().any(|w| *w == word)
    }

    /// Validate a guess a player wants to submit.
    pub fn check_guess(&self, word: &str, expected_len: u32) -> Result<(), GameError> {
        if word.chars().count() as u32 != expected_len {
            return Err(GameError::WrongLength {
                word: word.to_string(),
                expected: expected_len,
            });
        }
        if !word.chars().all(|c| c.is_alphabetic()) {
            return Err(GameError::NotAlphabetic {
                word: word.to_string(),
            });
        }
        if !self.contains(word) {
            return Err(GameError::NotAWord {
                word: word.to_string(),
            });
        }
        Ok(())
    }
}
