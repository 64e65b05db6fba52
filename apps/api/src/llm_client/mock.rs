use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{GenerationOptions, LlmError, ModelClient};

/// What a [`ScriptedModelClient`] answers with.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Delayed(Duration, String),
    /// Successful upstream answer with no text part.
    Missing,
    Status(u16, String),
    /// Never resolves.
    Hang,
}

/// A stand-in model client for tests. Returns the same scripted reply on every
/// call and counts how often it was invoked.
pub struct ScriptedModelClient {
    reply: StubReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedModelClient {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn complete(
        &self,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<Option<String>, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.reply {
            StubReply::Text(text) => Ok(Some(text.clone())),
            StubReply::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(Some(text.clone()))
            }
            StubReply::Missing => Ok(None),
            StubReply::Status(status, message) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            StubReply::Hang => std::future::pending().await,
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
