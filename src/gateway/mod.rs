use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::quiz::{Quiz, QuizError, RawQuestion};
use crate::session::upload::SelectedFile;

pub mod http;
#[cfg(test)]
pub mod mock;

pub const ENDPOINT_PATH: &'static str = "/api/generate-quiz";
pub const MESSAGE_MALFORMED_RESPONSE: &'static str = "Failed to parse quiz from response.";
pub const MESSAGE_BACKEND_UNREACHABLE: &'static str =
    "An unknown error occurred. Make sure your backend server is running.";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GatewayError {
    /// No response reached us.
    Transport(String),
    /// Non-2xx response, with the backend's own message when it sent one.
    Server(Option<String>),
    /// 2xx response without a usable `quiz` field.
    MalformedResponse,
    /// A quiz arrived but cannot be graded reliably.
    InvalidQuiz(QuizError),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GatewayError::*;
        match self {
            Transport(_) | Server(None) => f.write_str(MESSAGE_BACKEND_UNREACHABLE),
            Server(Some(message)) => f.write_str(message),
            MalformedResponse => f.write_str(MESSAGE_MALFORMED_RESPONSE),
            InvalidQuiz(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for GatewayError {}

pub trait QuizGateway {
    fn generate_quiz(
        &self,
        file: &SelectedFile,
        question_count: &str,
    ) -> Result<Quiz, GatewayError>;
}

#[derive(Deserialize)]
struct SuccessBody {
    quiz: Option<Vec<RawQuestion>>,
}

fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("error") {
        Some(Value::String(message)) if !message.trim().is_empty() => Some(message.clone()),
        _ => None,
    }
}

/// Maps an HTTP status and raw body onto the quiz or the user-facing failure.
pub fn interpret_response(status: u16, body: &str) -> Result<Quiz, GatewayError> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::Server(server_message(body)));
    }

    let raw_questions = serde_json::from_str::<SuccessBody>(body)
        .ok()
        .and_then(|b| b.quiz)
        .ok_or(GatewayError::MalformedResponse)?;

    Quiz::from_raw(raw_questions).map_err(|e| match e {
        QuizError::Empty => GatewayError::MalformedResponse,
        e => GatewayError::InvalidQuiz(e),
    })
}
