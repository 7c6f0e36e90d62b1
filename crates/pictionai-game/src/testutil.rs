//! Scripted model fakes for game logic tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use pictionai_openai::{ImageModel, Message, ModelError, Role, TextModel};

/// Text model that replays queued responses and records every call.
#[derive(Default)]
pub(crate) struct FakeTextModel {
    responses: Mutex<VecDeque<Result<String, ModelError>>>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl FakeTextModel {
    pub(crate) fn push_response(&self, raw: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(raw.into()));
    }

    pub(crate) fn push_error(&self, err: ModelError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// User-role content of the most recent call.
    pub(crate) fn last_user_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().and_then(|messages| {
            messages
                .iter()
                .rev()
                .find(|m| m.role == Role::User)
                .map(|m| m.content.clone())
        })
    }
}

#[async_trait]
impl TextModel for FakeTextModel {
    async fn complete(&self, messages: &[Message]) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::ApiError("no response queued".into())))
    }
}

/// Image model that replays queued URLs and records every prompt.
#[derive(Default)]
pub(crate) struct FakeImageModel {
    responses: Mutex<VecDeque<Result<String, ModelError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeImageModel {
    pub(crate) fn push_response(&self, url: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(url.into()));
    }

    pub(crate) fn push_error(&self, err: ModelError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageModel for FakeImageModel {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::ApiError("no image queued".into())))
    }
}
