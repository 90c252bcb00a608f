use base64::{engine::general_purpose::STANDARD, Engine};
use percent_encoding::percent_decode_str;
use std::string::FromUtf8Error;

use crate::opentdb_api::model::{Encoding, Question};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded text is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl Encoding {
    /// Reverses the encoding the API applied to a piece of question text.
    ///
    /// HTML entities are left as they are.
    pub fn decode(self, text: &str) -> Result<String, DecodeError> {
        match self {
            Encoding::HtmlCodes => Ok(text.to_owned()),
            Encoding::Url => Ok(String::from_utf8(percent_decode_str(text).collect())?),
            Encoding::Base64 => Ok(String::from_utf8(STANDARD.decode(text)?)?),
        }
    }
}

/// Builds a new question with `transform` applied to every text field.
///
/// The first error returned by `transform` is passed through as is.
pub fn decode_question<F, E>(question: &Question, mut transform: F) -> Result<Question, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    Ok(Question {
        type_field: transform(&question.type_field)?,
        category: transform(&question.category)?,
        question: transform(&question.question)?,
        difficulty: transform(&question.difficulty)?,
        correct_answer: transform(&question.correct_answer)?,
        incorrect_answers: question
            .incorrect_answers
            .iter()
            .map(|answer| transform(answer))
            .collect::<Result<_, _>>()?,
    })
}

impl Question {
    pub fn decoded(&self, encoding: Encoding) -> Result<Question, DecodeError> {
        decode_question(self, |text| encoding.decode(text))
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_question, DecodeError};
    use crate::opentdb_api::model::{Encoding, Question};
    use pretty_assertions::assert_eq;
    use std::convert::Infallible;

    fn base64_question() -> Question {
        Question {
            type_field: "bXVsdGlwbGU=".to_string(),
            category: "OQ==".to_string(),
            question: "V2hhdD8=".to_string(),
            difficulty: "ZWFzeQ==".to_string(),
            correct_answer: "QQ==".to_string(),
            incorrect_answers: vec!["Qg==".to_string(), "Qw==".to_string()],
        }
    }

    #[test]
    fn identity_keeps_the_question() {
        let question = base64_question();

        let decoded =
            decode_question(&question, |text| Ok::<_, Infallible>(text.to_owned())).unwrap();

        assert_eq!(decoded, question);
    }

    #[test]
    fn base64() {
        let raw = base64_question();

        let decoded = raw.decoded(Encoding::Base64).unwrap();

        assert_eq!(
            decoded,
            Question {
                type_field: "multiple".to_string(),
                category: "9".to_string(),
                question: "What?".to_string(),
                difficulty: "easy".to_string(),
                correct_answer: "A".to_string(),
                incorrect_answers: vec!["B".to_string(), "C".to_string()],
            }
        );
        // the raw question is untouched
        assert_eq!(raw, base64_question());
    }

    #[test]
    fn encodings() {
        let expected = "Don't forget that π = 3.14 & doesn't equal 3.";

        assert_eq!(
            Encoding::Url
                .decode("Don%27t%20forget%20that%20%CF%80%20%3D%203.14%20%26%20doesn%27t%20equal%203.")
                .unwrap(),
            expected
        );
        assert_eq!(
            Encoding::Base64
                .decode("RG9uJ3QgZm9yZ2V0IHRoYXQgz4AgPSAzLjE0ICYgZG9lc24ndCBlcXVhbCAzLg==")
                .unwrap(),
            expected
        );
        assert_eq!(
            Encoding::HtmlCodes.decode("Don&#039;t").unwrap(),
            "Don&#039;t"
        );
    }

    #[test]
    fn invalid_text() {
        assert!(matches!(
            Encoding::Base64.decode("not base64!"),
            Err(DecodeError::Base64(_))
        ));
        assert!(matches!(
            Encoding::Url.decode("%FF%FE"),
            Err(DecodeError::Utf8(_))
        ));
    }

    #[test]
    fn transform_errors_are_passed_through() {
        let mut question = base64_question();
        question.incorrect_answers.push("bad".to_string());

        let mut calls = 0;
        let result = decode_question(&question, |text| {
            calls += 1;
            match text {
                "bad" => Err(format!("cannot decode {}", text)),
                _ => Ok(text.to_owned()),
            }
        });

        assert_eq!(result, Err("cannot decode bad".to_string()));
        assert_eq!(calls, 8);
    }
}
