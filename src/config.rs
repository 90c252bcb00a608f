use std::env;

use crate::opentdb_api::{
    error::TriviaError,
    model::{Category, Difficulty, QuestionType},
    params::{TriviaParams, MAX_AMOUNT},
    DEFAULT_BASE_URL,
};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{var} '{value}' {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Runner settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub amount: u8,
    pub category: Option<Category>,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub use_token: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            amount: 1,
            category: None,
            difficulty: Difficulty::Any,
            question_type: QuestionType::Any,
            use_token: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let mut config = Config::default();

        if let Some(base_url) = get("OPENTDB_URL") {
            config.base_url = base_url;
        }

        if let Some(amount) = get("TRIVIA_AMOUNT") {
            config.amount = parse_in_range("TRIVIA_AMOUNT", &amount, MAX_AMOUNT)?;
        }

        if let Some(index) = get("TRIVIA_CATEGORY") {
            let index = parse_in_range("TRIVIA_CATEGORY", &index, 24)?;
            config.category = Category::from_index(index);
        }

        if let Some(difficulty) = get("TRIVIA_DIFFICULTY") {
            config.difficulty = match difficulty.trim().parse() {
                Ok(Difficulty::Any) | Err(_) => {
                    return Err(ConfigError {
                        var: "TRIVIA_DIFFICULTY",
                        value: difficulty,
                        reason: "is not one of easy | medium | hard".to_owned(),
                    })
                }
                Ok(difficulty) => difficulty,
            };
        }

        if let Some(question_type) = get("TRIVIA_TYPE") {
            config.question_type = match question_type.trim().parse() {
                Ok(QuestionType::Any) | Err(_) => {
                    return Err(ConfigError {
                        var: "TRIVIA_TYPE",
                        value: question_type,
                        reason: "is not one of multiple | boolean".to_owned(),
                    })
                }
                Ok(question_type) => question_type,
            };
        }

        if let Some(use_token) = get("TRIVIA_USE_TOKEN") {
            config.use_token = matches!(
                use_token.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(config)
    }

    pub fn trivia_params(&self, token: Option<String>) -> Result<TriviaParams, TriviaError> {
        Ok(TriviaParams::new(self.amount)?
            .with_category(self.category)
            .with_difficulty(self.difficulty)
            .with_type(self.question_type)
            .with_token(token))
    }
}

fn parse_in_range(var: &'static str, value: &str, max: u8) -> Result<u8, ConfigError> {
    let invalid = || ConfigError {
        var,
        value: value.to_owned(),
        reason: format!("is not in range 1..{}", max),
    };

    let parsed = value.trim().parse::<u8>().map_err(|_| invalid())?;

    if (1..=max).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(invalid())
    }
}
