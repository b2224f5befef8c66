use std::env;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::word_of_day::{DailyWordSelector, default_epoch};

/// Runtime configuration, environment-variable driven.
#[derive(Debug, Clone)]
pub struct Config {
    pub dev_mode: bool,
    pub dev_answer: String,
    pub epoch: NaiveDate,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let dev_mode = env::var("WARS_DEV_MODE").unwrap_or_else(|_| "false".to_string()) == "true";
        let dev_answer = env::var("WARS_DEV_ANSWER")
            .unwrap_or_else(|_| "pride".to_string())
            .to_lowercase();
        let epoch = match env::var("WARS_EPOCH") {
            Ok(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .with_context(|| format!("invalid WARS_EPOCH date: {}", raw))?,
            Err(_) => default_epoch(),
        };

        if dev_mode {
            info!("starting with dev mode word override enabled");
        }

        Ok(Self {
            dev_mode,
            dev_answer,
            epoch,
        })
    }

    /// Build the word selector this configuration describes.
    pub fn selector(&self) -> DailyWordSelector {
        if self.dev_mode {
            DailyWordSelector::with_dev_answer(self.dev_answer.clone())
        } else {
            DailyWordSelector::new(self.epoch)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dev_mode: false,
            dev_answer: "pride".to_string(),
            epoch: default_epoch(),
        }
    }
}
