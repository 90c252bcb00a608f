use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, iter};

use crate::opentdb_api::model::Question;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub answer: String,
    pub correct: bool,
}

/// Lists the correct answer and every incorrect one in display order.
///
/// Entries are ordered by the first UTF-16 code unit of their text, highest
/// first, so characters outside the BMP rank by their high surrogate. The
/// sort is stable, so on ties the correct answer comes before the incorrect
/// ones and those keep their API order. Empty answers go last.
pub fn build_answers(question: &Question) -> Vec<AnswerEntry> {
    let mut answers = iter::once(AnswerEntry {
        answer: question.correct_answer.clone(),
        correct: true,
    })
    .chain(question.incorrect_answers.iter().map(|answer| AnswerEntry {
        answer: answer.clone(),
        correct: false,
    }))
    .collect::<Vec<AnswerEntry>>();

    answers.sort_by_key(|entry| Reverse(entry.answer.encode_utf16().next()));

    answers
}

#[cfg(test)]
mod tests {
    use super::{build_answers, AnswerEntry};
    use crate::opentdb_api::model::Question;
    use pretty_assertions::assert_eq;

    fn question(correct: &str, incorrect: &[&str]) -> Question {
        Question {
            type_field: "multiple".to_string(),
            category: "Geography".to_string(),
            question: "What is the capital of France?".to_string(),
            difficulty: "easy".to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn entry(answer: &str, correct: bool) -> AnswerEntry {
        AnswerEntry {
            answer: answer.to_string(),
            correct,
        }
    }

    #[test]
    fn orders_by_first_character_descending() {
        let answers = build_answers(&question("Paris", &["London", "Tokyo"]));

        assert_eq!(
            answers,
            vec![
                entry("Tokyo", false),
                entry("Paris", true),
                entry("London", false),
            ]
        );
    }

    #[test]
    fn ties_keep_construction_order() {
        let answers = build_answers(&question("Apple", &["Avocado", "Banana", "Apricot"]));

        assert_eq!(
            answers,
            vec![
                entry("Banana", false),
                entry("Apple", true),
                entry("Avocado", false),
                entry("Apricot", false),
            ]
        );
    }

    #[test]
    fn one_correct_entry() {
        let q = question("42", &["41", "43", "Forty-two", "forty-two", "ℵ0"]);

        let answers = build_answers(&q);

        assert_eq!(answers.len(), 1 + q.incorrect_answers.len());
        let correct = answers.iter().filter(|a| a.correct).collect::<Vec<_>>();
        assert_eq!(correct, vec![&entry("42", true)]);

        let firsts = answers
            .iter()
            .map(|a| a.answer.chars().next().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(firsts, vec!['ℵ', 'f', 'F', '4', '4', '4']);
    }

    #[test]
    fn boolean_question() {
        let answers = build_answers(&question("False", &["True"]));

        assert_eq!(answers, vec![entry("True", false), entry("False", true)]);
    }

    #[test]
    fn astral_characters_rank_by_high_surrogate() {
        // U+1F600 starts with 0xD83D, below U+FF71
        let answers = build_answers(&question("😀 smile", &["ｱ katakana", "Z"]));

        assert_eq!(
            answers,
            vec![
                entry("ｱ katakana", false),
                entry("😀 smile", true),
                entry("Z", false),
            ]
        );
    }

    #[test]
    fn no_incorrect_answers() {
        let answers = build_answers(&question("Only", &[]));

        assert_eq!(answers, vec![entry("Only", true)]);
    }

    #[test]
    fn empty_answers_go_last() {
        let answers = build_answers(&question("", &["A", ""]));

        assert_eq!(
            answers,
            vec![entry("A", false), entry("", true), entry("", false)]
        );
    }

    #[test]
    fn building_twice_is_identical() {
        let q = question("Mercury", &["Venus", "Mars", "Jupiter"]);

        assert_eq!(build_answers(&q), build_answers(&q));
    }
}
