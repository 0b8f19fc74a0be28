use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::gateway::{interpret_response, GatewayError, QuizGateway};
use crate::quiz::Quiz;
use crate::session::upload::SelectedFile;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedRequest {
    pub file_name: String,
    pub question_count: String,
}

#[derive(Clone, Default)]
pub struct MockGateway {
    responses: Arc<RwLock<VecDeque<Result<Quiz, GatewayError>>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .write()
            .push_back(interpret_response(status, body));
        self
    }

    pub fn fail(&self, error: GatewayError) -> &Self {
        self.responses.write().push_back(Err(error));
        self
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().clone()
    }
}

impl QuizGateway for MockGateway {
    fn generate_quiz(
        &self,
        file: &SelectedFile,
        question_count: &str,
    ) -> Result<Quiz, GatewayError> {
        self.requests.write().push(RecordedRequest {
            file_name: file.get_name().to_owned(),
            question_count: question_count.to_owned(),
        });
        self.responses
            .write()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Transport("no canned response".to_owned())))
    }
}
