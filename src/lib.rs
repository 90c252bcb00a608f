//! Client for the Open Trivia Database.
//!
//! Fetches question batches and session tokens, decodes the returned text and
//! builds the answer list shown for each question.

pub mod answers;
pub mod config;
pub mod decode;
pub mod opentdb_api;
pub mod query;
pub mod quiz;

pub use answers::{build_answers, AnswerEntry};
pub use decode::{decode_question, DecodeError};
pub use opentdb_api::{
    error::TriviaError,
    model::{
        Category, Difficulty, Encoding, Question, QuestionType, ResponseCode, TokenResponse,
        TriviaResponse,
    },
    params::{TokenParams, TriviaParams},
    TriviaClient,
};
pub use query::{encode_query, QueryValue, ToQuery};
pub use quiz::{Outcome, Quiz, QuizError, Round, Score};
