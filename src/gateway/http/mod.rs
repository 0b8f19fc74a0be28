use anyhow::{Context, Result};
use log::{debug, error, warn};
use reqwest::blocking::{multipart, Client};
use std::time::Duration;

use crate::gateway::{interpret_response, GatewayError, QuizGateway};
use crate::quiz::Quiz;
use crate::session::upload::SelectedFile;


pub struct HttpGateway {
    client: Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Could not build HTTP client")?;
        Ok(HttpGateway { client, endpoint })
    }

    #[cfg(test)]
    pub fn with_client(client: Client, endpoint: String) -> Self {
        HttpGateway { client, endpoint }
    }

    pub fn get_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(
        file: &SelectedFile,
        question_count: &str,
    ) -> std::result::Result<multipart::Form, GatewayError> {
        let part = multipart::Part::bytes(file.get_bytes().to_vec())
            .file_name(file.get_name().to_owned())
            .mime_str(file.get_media_type())
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(multipart::Form::new()
            .part("file", part)
            .text("num_questions", question_count.to_owned()))
    }
}

impl QuizGateway for HttpGateway {
    fn generate_quiz(
        &self,
        file: &SelectedFile,
        question_count: &str,
    ) -> std::result::Result<Quiz, GatewayError> {
        let form = HttpGateway::build_form(file, question_count)?;

        debug!(
            "Posting {:?} ({} bytes) to {} for {} questions",
            file.get_name(),
            file.get_bytes().len(),
            self.endpoint,
            question_count
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| {
                error!("Quiz request failed: {}", e);
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        // An unreadable body still carries a status worth interpreting
        let body = response.text().unwrap_or_else(|e| {
            warn!("Could not read backend response body: {}", e);
            String::new()
        });

        let result = interpret_response(status, &body);
        if let Err(e) = &result {
            warn!("Backend answered {} but no quiz was produced: {:?}", status, e);
        }
        result
    }
}
