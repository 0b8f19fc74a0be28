use std::collections::BTreeMap;

use crate::quiz::{Question, Quiz};

#[cfg(test)]
mod tests;

/// Chosen option per question index. Unanswered questions are absent.
pub type Answers = BTreeMap<usize, usize>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionMark {
    Unmarked,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    Correct,
    Incorrect { correct_answer: String },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayedOption {
    pub text: String,
    pub selected: bool,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayedQuestion {
    pub number: usize,
    pub prompt: String,
    pub options: Vec<DisplayedOption>,
    pub verdict: Option<Verdict>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizDisplay {
    pub questions: Vec<DisplayedQuestion>,
    pub submitted: bool,
}

fn mark_option(question: &Question, option_index: usize, selected: Option<usize>) -> OptionMark {
    if option_index == question.correct_index() {
        OptionMark::Correct
    } else if selected == Some(option_index) {
        OptionMark::Incorrect
    } else {
        OptionMark::Unmarked
    }
}

fn grade(question: &Question, selected: Option<usize>) -> Verdict {
    if question.is_correct(selected) {
        Verdict::Correct
    } else {
        Verdict::Incorrect {
            correct_answer: question.correct_answer.clone(),
        }
    }
}

impl QuizDisplay {
    pub fn new(quiz: &Quiz, answers: &Answers, submitted: bool) -> Self {
        let questions = quiz
            .get_questions()
            .iter()
            .enumerate()
            .map(|(question_index, question)| {
                let selected = answers.get(&question_index).copied();
                let options = question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(option_index, text)| DisplayedOption {
                        text: text.clone(),
                        selected: selected == Some(option_index),
                        mark: if submitted {
                            mark_option(question, option_index, selected)
                        } else {
                            OptionMark::Unmarked
                        },
                    })
                    .collect();
                DisplayedQuestion {
                    number: question_index + 1,
                    prompt: question.prompt.clone(),
                    options,
                    verdict: if submitted {
                        Some(grade(question, selected))
                    } else {
                        None
                    },
                }
            })
            .collect();

        QuizDisplay {
            questions,
            submitted,
        }
    }

    /// Number of correct answers out of the total, once graded.
    pub fn score(&self) -> Option<(usize, usize)> {
        if !self.submitted {
            return None;
        }
        let correct = self
            .questions
            .iter()
            .filter(|q| q.verdict == Some(Verdict::Correct))
            .count();
        Some((correct, self.questions.len()))
    }
}
