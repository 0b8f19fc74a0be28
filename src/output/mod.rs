use crate::quiz::display::QuizDisplay;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerRecorded(usize, String),
    FileIgnored(String),
    FileSelected(String),
    FormShown(Option<String>, String),
    Generating,
    GenerationCancelled,
    GenerationFailed(String),
    QuestionCountChanged(String),
    QuizShown(QuizDisplay),
}

pub trait SessionOutput {
    fn say(&self, message: &Message);
}
