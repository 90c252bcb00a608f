use super::{
    error::TriviaError,
    model::{Category, Difficulty, Encoding, QuestionType},
};
use crate::query::{QueryValue, ToQuery};

pub const MAX_AMOUNT: u8 = 50;

/// Parameters for a question fetch.
///
/// Built once through [`TriviaParams::new`] and the `with_*` methods; every
/// request encodes a fresh copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaParams {
    amount: u8,
    category: Option<Category>,
    difficulty: Difficulty,
    question_type: QuestionType,
    encode: Encoding,
    token: Option<String>,
}

impl TriviaParams {
    pub fn new(amount: u8) -> Result<Self, TriviaError> {
        if !(1..=MAX_AMOUNT).contains(&amount) {
            return Err(TriviaError::InvalidParameter(format!(
                "amount '{}' is not in range 1..{}",
                amount, MAX_AMOUNT
            )));
        }

        Ok(Self {
            amount,
            category: None,
            difficulty: Difficulty::Any,
            question_type: QuestionType::Any,
            encode: Encoding::HtmlCodes,
            token: None,
        })
    }

    pub fn with_category(self, category: impl Into<Option<Category>>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }

    pub fn with_type(self, question_type: QuestionType) -> Self {
        Self {
            question_type,
            ..self
        }
    }

    pub fn with_encoding(self, encode: Encoding) -> Self {
        Self { encode, ..self }
    }

    pub fn with_token(self, token: impl Into<Option<String>>) -> Self {
        Self {
            token: token.into(),
            ..self
        }
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn encoding(&self) -> Encoding {
        self.encode
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl ToQuery for TriviaParams {
    fn query_pairs(&self) -> Vec<(&'static str, QueryValue)> {
        vec![
            ("amount", self.amount.into()),
            ("category", self.category.map(Category::id).into()),
            ("difficulty", self.difficulty.as_str().into()),
            ("type", self.question_type.as_str().into()),
            ("encode", self.encode.as_str().into()),
            ("token", self.token.as_deref().into()),
        ]
    }
}

/// Session token commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenParams {
    Request,
    Reset { token: String },
}

impl ToQuery for TokenParams {
    fn query_pairs(&self) -> Vec<(&'static str, QueryValue)> {
        match self {
            TokenParams::Request => vec![("command", "request".into())],
            TokenParams::Reset { token } => vec![
                ("command", "reset".into()),
                ("token", token.as_str().into()),
            ],
        }
    }
}
