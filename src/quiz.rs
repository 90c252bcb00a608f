use std::fmt;

use crate::{
    answers::{build_answers, AnswerEntry},
    opentdb_api::model::Question,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("'{choice}' is not a valid selection between 1 and {len}, try selecting again.")]
    InvalidChoice { choice: usize, len: usize },
    #[error("there are no questions left")]
    Finished,
}

/// A decoded question together with its answers in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub question: Question,
    pub answers: Vec<AnswerEntry>,
}

impl Round {
    pub fn new(question: Question) -> Self {
        let answers = build_answers(&question);
        Self { question, answers }
    }

    /// 1-based position of the correct answer.
    pub fn correct_index(&self) -> usize {
        self.answers
            .iter()
            .position(|entry| entry.correct)
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.question.question)?;
        for (i, entry) in self.answers.iter().enumerate() {
            writeln!(f, "[{}] {}", i + 1, entry.answer)?;
        }
        f.write_str(":")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub chosen_index: usize,
    pub chosen: AnswerEntry,
    pub correct_index: usize,
    pub correct_answer: String,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        self.chosen.correct
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_correct() {
            write!(
                f,
                "Correct! [{}] {} was the right answer!",
                self.chosen_index, self.chosen.answer
            )
        } else {
            write!(
                f,
                "Incorrect! [{}] {} was the wrong answer!\nThe correct answer was: [{}] {}",
                self.chosen_index, self.chosen.answer, self.correct_index, self.correct_answer
            )
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}

/// Walks a batch of decoded questions and keeps the running score.
#[derive(Debug, Clone)]
pub struct Quiz {
    rounds: Vec<Round>,
    position: usize,
    correct: usize,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            rounds: questions.into_iter().map(Round::new).collect(),
            position: 0,
            correct: 0,
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current(&self) -> Option<&Round> {
        self.rounds.get(self.position)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.rounds.len()
    }

    /// Answers the current question with a 1-based `choice`.
    ///
    /// An out of range choice leaves the quiz on the same question.
    pub fn answer(&mut self, choice: usize) -> Result<Outcome, QuizError> {
        let round = self.current().ok_or(QuizError::Finished)?;

        let chosen = choice
            .checked_sub(1)
            .and_then(|i| round.answers.get(i))
            .ok_or(QuizError::InvalidChoice {
                choice,
                len: round.answers.len(),
            })?;

        let outcome = Outcome {
            chosen_index: choice,
            chosen: chosen.clone(),
            correct_index: round.correct_index(),
            correct_answer: round.question.correct_answer.clone(),
        };

        if outcome.is_correct() {
            self.correct += 1;
        }
        self.position += 1;

        Ok(outcome)
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            answered: self.position,
            total: self.rounds.len(),
        }
    }
}
