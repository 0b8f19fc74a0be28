use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

pub mod dispatch;
pub mod upload;

use self::upload::{FileSource, SelectedFile, UploadForm};
use crate::gateway::GatewayError;
use crate::output::{Message, SessionOutput};
use crate::quiz::display::{Answers, QuizDisplay};
use crate::quiz::Quiz;


pub const MESSAGE_MISSING_FILE: &'static str = "Please upload a PDF file.";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RequestId(u64);

#[derive(Clone, Debug)]
pub struct QuizRequest {
    pub id: RequestId,
    pub file: SelectedFile,
    pub question_count: String,
}

#[derive(Clone, Debug)]
pub struct QuizView {
    quiz: Quiz,
    answers: Answers,
    submitted: bool,
}

impl QuizView {
    fn new(quiz: Quiz) -> Self {
        QuizView {
            quiz,
            answers: Answers::new(),
            submitted: false,
        }
    }

    fn display(&self) -> QuizDisplay {
        QuizDisplay::new(&self.quiz, &self.answers, self.submitted)
    }
}

#[derive(Clone, Debug)]
pub enum View {
    Form,
    Loading(RequestId),
    Error(String),
    Quiz(QuizView),
}

pub struct Session<O: SessionOutput> {
    form: UploadForm,
    current_view: View,
    last_request_id: u64,
    output: O,
}

pub type SessionHandle<O> = Arc<Mutex<Session<O>>>;

impl<O: SessionOutput> Session<O> {
    pub fn new(question_count: u32, output: O) -> Self {
        Session {
            form: UploadForm::new(question_count),
            current_view: View::Form,
            last_request_id: 0,
            output,
        }
    }

    fn set_current_view(&mut self, view: View) {
        info!("Entering view: {}", view_name(&view));
        self.current_view = view;
    }

    fn is_loading(&self) -> bool {
        match self.current_view {
            View::Loading(_) => true,
            _ => false,
        }
    }

    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let file = SelectedFile::open(path)?;
        self.select_file(file)
    }

    pub fn select_file(&mut self, file: SelectedFile) -> Result<()> {
        let name = file.get_name().to_owned();
        if !self.form.offer_file(file, FileSource::Picker) {
            return Err(anyhow!("{} is not a PDF file", name));
        }
        self.output.say(&Message::FileSelected(name));
        Ok(())
    }

    /// Non-PDF drops are ignored rather than treated as errors.
    pub fn drop_file(&mut self, file: SelectedFile) {
        let name = file.get_name().to_owned();
        if self.form.offer_file(file, FileSource::Drop) {
            self.output.say(&Message::FileSelected(name));
        } else {
            self.output.say(&Message::FileIgnored(name));
        }
    }

    pub fn set_question_count(&mut self, raw_count: &str) {
        self.form.set_question_count(raw_count);
        self.output.say(&Message::QuestionCountChanged(
            self.form.get_question_count().to_owned(),
        ));
    }

    pub fn submit(&mut self) -> Result<QuizRequest> {
        if self.is_loading() {
            self.output.say(&Message::Generating);
            return Err(anyhow!("A quiz is already being generated"));
        }

        let file = match self.form.get_file() {
            Some(file) => file.clone(),
            None => {
                self.set_current_view(View::Error(MESSAGE_MISSING_FILE.to_owned()));
                self.output
                    .say(&Message::GenerationFailed(MESSAGE_MISSING_FILE.to_owned()));
                return Err(anyhow!(MESSAGE_MISSING_FILE));
            }
        };

        self.last_request_id += 1;
        let id = RequestId(self.last_request_id);
        self.set_current_view(View::Loading(id));
        self.output.say(&Message::Generating);

        Ok(QuizRequest {
            id,
            file,
            question_count: self.form.get_question_count().to_owned(),
        })
    }

    /// Hands a finished request back to the session. Returns false when the
    /// request was abandoned in the meantime.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: std::result::Result<Quiz, GatewayError>,
    ) -> bool {
        match self.current_view {
            View::Loading(pending) if pending == id => (),
            _ => {
                debug!("Dropping response to abandoned request {:?}", id);
                return false;
            }
        }

        match result {
            Ok(quiz) => {
                let quiz_view = QuizView::new(quiz);
                let display = quiz_view.display();
                self.set_current_view(View::Quiz(quiz_view));
                self.output.say(&Message::QuizShown(display));
            }
            Err(e) => {
                let message = e.to_string();
                self.set_current_view(View::Error(message.clone()));
                self.output.say(&Message::GenerationFailed(message));
            }
        }
        true
    }

    pub fn cancel(&mut self) -> Result<()> {
        if !self.is_loading() {
            return Err(anyhow!("There is no quiz being generated"));
        }
        self.set_current_view(View::Form);
        self.output.say(&Message::GenerationCancelled);
        Ok(())
    }

    pub fn select_option(&mut self, question_index: usize, option_index: usize) -> Result<()> {
        match &mut self.current_view {
            View::Quiz(quiz_view) => {
                if quiz_view.submitted {
                    return Err(anyhow!("Answers cannot change after the quiz was submitted"));
                }
                let question = quiz_view
                    .quiz
                    .get_question(question_index)
                    .with_context(|| format!("There is no question {}", question_index + 1))?;
                let option = question
                    .options
                    .get(option_index)
                    .with_context(|| {
                        format!("Question {} has no such option", question_index + 1)
                    })?
                    .clone();
                quiz_view.answers.insert(question_index, option_index);
                self.output
                    .say(&Message::AnswerRecorded(question_index + 1, option));
                Ok(())
            }
            _ => Err(anyhow!("There is no quiz to answer")),
        }
    }

    pub fn submit_quiz(&mut self) -> Result<()> {
        match &mut self.current_view {
            View::Quiz(quiz_view) => {
                if quiz_view.submitted {
                    return Err(anyhow!("The quiz was already submitted"));
                }
                quiz_view.submitted = true;
                info!(
                    "Quiz submitted with {} of {} questions answered",
                    quiz_view.answers.len(),
                    quiz_view.quiz.len()
                );
                self.output.say(&Message::QuizShown(quiz_view.display()));
                Ok(())
            }
            _ => Err(anyhow!("There is no quiz to submit")),
        }
    }

    /// Back to an empty form. Abandons any request still in flight.
    pub fn retake(&mut self) {
        self.form.clear_file();
        self.set_current_view(View::Form);
        self.show();
    }

    fn form_message(&self) -> Message {
        Message::FormShown(
            self.form.get_file().map(|f| f.get_name().to_owned()),
            self.form.get_question_count().to_owned(),
        )
    }

    pub fn show(&self) {
        match &self.current_view {
            View::Form => self.output.say(&self.form_message()),
            View::Loading(_) => self.output.say(&Message::Generating),
            View::Error(error) => {
                // The form stays usable after a failure
                self.output.say(&self.form_message());
                self.output.say(&Message::GenerationFailed(error.clone()));
            }
            View::Quiz(quiz_view) => self.output.say(&Message::QuizShown(quiz_view.display())),
        }
    }
}

#[cfg(test)]
impl<O: SessionOutput> Session<O> {
    pub fn get_current_view(&self) -> &View {
        &self.current_view
    }

    pub fn get_file(&self) -> Option<&SelectedFile> {
        self.form.get_file()
    }

    pub fn get_question_count(&self) -> &str {
        self.form.get_question_count()
    }

    pub fn get_quiz(&self) -> Option<&Quiz> {
        match &self.current_view {
            View::Quiz(quiz_view) => Some(&quiz_view.quiz),
            _ => None,
        }
    }

    pub fn get_answers(&self) -> Option<&Answers> {
        match &self.current_view {
            View::Quiz(quiz_view) => Some(&quiz_view.answers),
            _ => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        match &self.current_view {
            View::Quiz(quiz_view) => quiz_view.submitted,
            _ => false,
        }
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.current_view {
            View::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn get_display(&self) -> Option<QuizDisplay> {
        match &self.current_view {
            View::Quiz(quiz_view) => Some(quiz_view.display()),
            _ => None,
        }
    }
}

fn view_name(view: &View) -> &'static str {
    match view {
        View::Form => "form",
        View::Loading(_) => "loading",
        View::Error(_) => "error",
        View::Quiz(_) => "quiz",
    }
}
