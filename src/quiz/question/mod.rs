use serde::Deserialize;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt;


#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub correct_index: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionError {
    TooFewOptions,
    NoMatchingOption(String),
    IndexOutOfRange(usize),
    IndexDisagreesWithAnswer(usize),
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use QuestionError::*;
        match self {
            TooFewOptions => write!(f, "it needs at least two options"),
            NoMatchingOption(answer) => {
                write!(f, "no option matches the correct answer {:?}", answer)
            }
            IndexOutOfRange(index) => write!(f, "correct index {} is out of range", index),
            IndexDisagreesWithAnswer(index) => write!(
                f,
                "correct index {} does not point at the correct answer",
                index
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    correct_index: usize,
}

impl Question {
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// A question without a selection is never graded correct.
    pub fn is_correct(&self, selected: Option<usize>) -> bool {
        selected == Some(self.correct_index)
    }

    pub fn has_duplicate_options(&self) -> bool {
        let unique: HashSet<&str> = self.options.iter().map(|o| o.as_str()).collect();
        unique.len() != self.options.len()
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        if raw_question.options.len() < 2 {
            return Err(QuestionError::TooFewOptions);
        }

        // First match wins when options repeat
        let matching_index = raw_question
            .options
            .iter()
            .position(|option| *option == raw_question.correct_answer);

        let correct_index = match (raw_question.correct_index, matching_index) {
            (Some(index), _) if index >= raw_question.options.len() => {
                return Err(QuestionError::IndexOutOfRange(index));
            }
            (Some(index), _) if raw_question.correct_answer.is_empty() => index,
            (Some(index), _) if raw_question.options[index] == raw_question.correct_answer => {
                index
            }
            (Some(index), _) => return Err(QuestionError::IndexDisagreesWithAnswer(index)),
            (None, Some(index)) => index,
            (None, None) => {
                return Err(QuestionError::NoMatchingOption(raw_question.correct_answer));
            }
        };

        let correct_answer = raw_question.options[correct_index].clone();
        Ok(Question {
            prompt: raw_question.question,
            options: raw_question.options,
            correct_answer,
            correct_index,
        })
    }
}
