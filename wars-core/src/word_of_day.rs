use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use tracing::info;

use wars_types::WordOfDay;

use crate::word_list::AnswerList;

/// Day 1 of the answer rotation (UTC).
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 2, 15).expect("valid epoch date")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("answer list is empty")]
    EmptyAnswerList,
}

/// Maps a wall-clock instant to the day's answer word.
///
/// Every client on the same UTC calendar day gets the same word, whatever
/// their time zone or time of day.
pub struct DailyWordSelector {
    epoch: NaiveDate,
    dev_answer: Option<String>,
}

impl DailyWordSelector {
    pub fn new(epoch: NaiveDate) -> Self {
        Self {
            epoch,
            dev_answer: None,
        }
    }

    /// Selector that always answers `word` on day 1, for repeatable manual
    /// testing. Only reachable through explicit configuration.
    pub fn with_dev_answer(word: impl Into<String>) -> Self {
        Self {
            epoch: default_epoch(),
            dev_answer: Some(word.into().to_lowercase()),
        }
    }

    pub fn select(
        &self,
        now: DateTime<Utc>,
        answers: &AnswerList,
    ) -> Result<WordOfDay, ConfigurationError> {
        if let Some(answer) = &self.dev_answer {
            info!("dev mode: answer is {}", answer.to_uppercase());
            return Ok(WordOfDay {
                answer: answer.clone(),
                answer_day: 1,
            });
        }

        if answers.is_empty() {
            return Err(ConfigurationError::EmptyAnswerList);
        }

        let today = now.date_naive();
        let day = (today - self.epoch).num_days();
        let index = day.rem_euclid(answers.len() as i64) as usize;

        Ok(WordOfDay {
            answer: answers.words()[index].clone(),
            answer_day: index as u32 + 1,
        })
    }
}

impl Default for DailyWordSelector {
    fn default() -> Self {
        Self::new(default_epoch())
    }
}
