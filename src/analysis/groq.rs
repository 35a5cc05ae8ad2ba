use std::time::Duration;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::CompletionProvider;
use crate::error::AnalysisError;
use crate::models::ModelName;

const REQUEST_TIMEOUT_SECS: u64 = 20;
const MAX_COMPLETION_TOKENS: u32 = 700;
const TEMPERATURE: f32 = 0.5;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Completion transport against the Groq OpenAI-compatible chat endpoint.
pub struct GroqCompletion {
    endpoint: String,
    api_key: String,
}

impl GroqCompletion {
    pub fn new(endpoint: &str, api_key: &str) -> GroqCompletion {
        GroqCompletion {
            endpoint: String::from(endpoint),
            api_key: String::from(api_key),
        }
    }
}

impl CompletionProvider for GroqCompletion {
    fn complete(&self, model: ModelName, prompt: &str) -> Result<String, AnalysisError> {
        trace!("GroqCompletion::complete()");

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(AnalysisError::ServiceUnavailable)?;

        let request = ChatRequest {
            model: model.as_str(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = client
            .post(self.endpoint.as_str())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(AnalysisError::ServiceUnavailable)?
            .error_for_status()
            .map_err(AnalysisError::ServiceUnavailable)?;

        let completion = response
            .json::<ChatResponse>()
            .map_err(|_| AnalysisError::EmptyResult)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AnalysisError::EmptyResult)
    }
}
