use itertools::Itertools;

use crate::output::{Message, SessionOutput};
use crate::quiz::display::{DisplayedQuestion, OptionMark, QuizDisplay, Verdict};
use crate::session::upload::{QUESTION_COUNT_MAX, QUESTION_COUNT_MIN};


pub const BANNER: &'static str = "Lecture-to-Quiz Generator\nUpload your PDF lecture slides and get a multiple-choice quiz in seconds.";

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

/// Letters while they last, then 1-based numbers. Both forms are accepted by `answer`.
fn option_label(index: usize) -> String {
    if index < 26 {
        ((b'a' + index as u8) as char).to_string()
    } else {
        (index + 1).to_string()
    }
}

fn interpret_question(question: &DisplayedQuestion) -> String {
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let radio = if option.selected { "(•)" } else { "( )" };
            let mark = match option.mark {
                OptionMark::Correct => " ✅",
                OptionMark::Incorrect => " ❌",
                OptionMark::Unmarked => "",
            };
            format!("   {} {}) {}{}", radio, option_label(index), option.text, mark)
        })
        .join("\n");

    let mut text = format!("{}. {}\n{}", question.number, question.prompt, options);
    match &question.verdict {
        Some(Verdict::Correct) => text += "\n   Correct!",
        Some(Verdict::Incorrect { correct_answer }) => {
            text += &format!("\n   Incorrect. The correct answer was: {}", correct_answer)
        }
        None => (),
    }
    text
}

fn interpret_quiz(display: &QuizDisplay) -> String {
    let mut text = "Your Quiz\n\n".to_owned();
    text += &display.questions.iter().map(interpret_question).join("\n\n");
    match display.score() {
        Some((correct, total)) => {
            text += &format!(
                "\n\nYou scored {} out of {}. Use `retake` to Generate Another Quiz.",
                correct, total
            );
        }
        None => text += "\n\nUse `answer <question> <option>` to choose, then `submit` to Submit Quiz.",
    }
    text
}

impl TerminalOutput {
    pub fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            AnswerRecorded(number, option) => format!("Question {}: {}", number, option),
            FileIgnored(name) => format!("Ignored {}: PDF files only.", name),
            FileSelected(name) => format!("File selected: {}", name),
            FormShown(file, count) => {
                let file = match file {
                    Some(name) => format!("File selected: {}", name),
                    None => "No file selected. Use `open <path>` or `drop <path>`.".to_owned(),
                };
                format!(
                    "1. Upload PDF Slides\n   {}\n2. Number of Questions ({}-{})\n   {}\nUse `generate` to Generate Quiz.",
                    file, QUESTION_COUNT_MIN, QUESTION_COUNT_MAX, count
                )
            }
            Generating => "Generating...".into(),
            GenerationCancelled => "Quiz generation was cancelled.".into(),
            GenerationFailed(error) => format!("Error: {}", error),
            QuestionCountChanged(count) => format!("Number of questions: {}", count),
            QuizShown(display) => interpret_quiz(display),
        }
    }
}

impl SessionOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}\n", self.interpret_message(message));
    }
}
