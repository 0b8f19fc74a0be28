use log::warn;
use std::convert::TryFrom;
use std::fmt;


pub mod display;
pub mod question;

pub use question::{Question, QuestionError, RawQuestion};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizError {
    Empty,
    InvalidQuestion(usize, QuestionError),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Empty => write!(f, "The quiz contains no questions."),
            QuizError::InvalidQuestion(index, error) => {
                write!(f, "Question {} cannot be graded: {}.", index + 1, error)
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// Questions in the order the backend sent them. Never mutated once received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    pub fn from_raw(raw_questions: Vec<RawQuestion>) -> Result<Quiz, QuizError> {
        if raw_questions.is_empty() {
            return Err(QuizError::Empty);
        }

        let mut questions = Vec::with_capacity(raw_questions.len());
        for (index, raw_question) in raw_questions.into_iter().enumerate() {
            let question = Question::try_from(raw_question)
                .map_err(|e| QuizError::InvalidQuestion(index, e))?;
            if question.has_duplicate_options() {
                warn!(
                    "Question {} repeats an option, grading uses the first match",
                    index + 1
                );
            }
            questions.push(question);
        }

        Ok(Quiz { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn get_question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
pub fn sample_quiz() -> Quiz {
    Quiz::from_raw(vec![
        RawQuestion {
            question: "Q1".to_owned(),
            options: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
            correct_answer: "B".to_owned(),
            correct_index: None,
        },
        RawQuestion {
            question: "Q2".to_owned(),
            options: vec!["True".to_owned(), "False".to_owned()],
            correct_answer: "False".to_owned(),
            correct_index: None,
        },
    ])
    .unwrap()
}
