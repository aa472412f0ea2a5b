use anyhow::Context as _;
use axum::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeminiConfig;
use crate::profile::repo_types::BloodType;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Nutrition assistant backed by some completion API. One call per
/// question, no retry; a failure is reported to the caller and nothing is
/// kept between calls.
#[async_trait]
pub trait DietAdvisor: Send + Sync {
    async fn diet_advice(&self, blood_type: BloodType, question: &str) -> anyhow::Result<String>;
}

/// `DietAdvisor` implementation for the Gemini `generateContent` endpoint.
pub struct GeminiAdvisor {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiAdvisor {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// The assistant's instructions: weight-loss nutrition for one blood type,
/// nothing else, always with the see-your-doctor caveat, replies in
/// Brazilian Portuguese.
pub fn advice_prompt(blood_type: BloodType, question: &str) -> String {
    format!(
        "You are a nutrition assistant specialized in the blood type diet for weight loss. \
         Your main job is to recommend diets and recipes focused on losing weight for blood type {blood_type}.\n\
         \n\
         STRICT RULES:\n\
         1. Only answer questions about food, nutrition, diets and recipes.\n\
         2. If the user asks about anything else, politely reply that your specialty is blood \
         type diet nutrition only.\n\
         3. Whenever you recommend a diet or recipe, include a reminder that these are \
         suggestions only and the user should consult their doctor for precise guidance, \
         especially while taking medication or undergoing treatment.\n\
         4. Give practical, weight-loss-focused advice for blood type {blood_type}.\n\
         5. Answer in Brazilian Portuguese.\n\
         \n\
         User question: \"{question}\""
    )
}

#[async_trait]
impl DietAdvisor for GeminiAdvisor {
    async fn diet_advice(&self, blood_type: BloodType, question: &str) -> anyhow::Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is not configured"))?;

        let url = format!(
            "{API_BASE_URL}/models/{}:generateContent?key={api_key}",
            self.config.model
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: advice_prompt(blood_type, question),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("gemini returned {status}: {detail}");
        }

        let parsed: GenerateResponse =
            response.json().await.context("gemini response body")?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            anyhow::bail!("gemini returned no candidates");
        }
        debug!(model = %self.config.model, %blood_type, "advice generated");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_blood_type_and_question() {
        let prompt = advice_prompt(BloodType::O, "can I eat red meat?");
        assert!(prompt.contains("blood type O"));
        assert!(prompt.contains("can I eat red meat?"));
        assert!(prompt.contains("Brazilian Portuguese"));
    }

    #[tokio::test]
    async fn missing_api_key_is_an_error() {
        let advisor = GeminiAdvisor::new(GeminiConfig {
            api_key: None,
            model: "gemini-2.0-flash".into(),
        });
        let err = advisor
            .diet_advice(BloodType::A, "hello")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
