use astro_guru::{Error, Result, llm::CompletionClient};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock completion client for testing: records every prompt it receives and
/// replays canned answers (or a canned error).
pub struct MockCompletionClient {
    answers: Mutex<Vec<String>>,
    prompts: Arc<Mutex<Vec<String>>>,
    error: Option<Error>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(Vec::new()),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_answer(answer: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.answers.lock().unwrap().push(answer.into());
        mock
    }

    pub fn with_error(error: Error) -> Self {
        let mut mock = Self::new();
        mock.error = Some(error);
        mock
    }

    /// Handle onto the recorded prompts, usable after the mock has been moved
    /// into a handler.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(error.clone());
        }

        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() {
            return Err(Error::internal("No more mock answers available"));
        }

        Ok(answers.remove(0))
    }
}
