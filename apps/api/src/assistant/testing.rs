//! Canned [`TextService`] for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextService};

pub struct CannedTextService {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl CannedTextService {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextService for CannedTextService {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            }),
        }
    }
}
