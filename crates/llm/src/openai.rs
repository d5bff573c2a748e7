use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::client::{CompletionClient, CompletionError};

/// Client for the OpenAI legacy completions endpoint.
pub struct OpenAiCompletions {
    client: reqwest::Client,
    api_key: String,
    engine: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiCompletions {
    pub fn new(
        api_key: String,
        engine: String,
        base_url: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            engine,
            base_url,
            temperature,
            max_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletions {
    async fn complete(&self, instruction: &str, chunk: &str) -> Result<String, CompletionError> {
        let url = format!("{}/v1/completions", self.base_url);

        let body = json!({
            "model": self.engine,
            "prompt": format!("{} \n\n{}\n\n", instruction, chunk),
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        debug!("OpenAI request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        let text = resp["choices"][0]["text"]
            .as_str()
            .ok_or_else(|| CompletionError::Parse("missing choices[0].text".into()))?;

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: String) -> OpenAiCompletions {
        OpenAiCompletions::new(
            "sk-test".to_string(),
            "text-davinci-003".to_string(),
            base_url,
            0.5,
            200,
        )
    }

    #[tokio::test]
    async fn sends_prompt_and_returns_trimmed_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "text-davinci-003",
                "prompt": "Summarize the talk. \n\nhello world\n\n",
                "max_tokens": 200,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"text": "\n\n- point one\n- point two\n"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(server.uri())
            .complete("Summarize the talk.", "hello world")
            .await
            .unwrap();
        assert_eq!(text, "- point one\n- point two");
    }

    #[tokio::test]
    async fn api_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client(server.uri())
            .complete("Summarize.", "text")
            .await
            .unwrap_err();
        match err {
            CompletionError::Api { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("invalid api key"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_choices_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "text_completion",
                "choices": []
            })))
            .mount(&server)
            .await;

        let err = client(server.uri())
            .complete("Summarize.", "text")
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Parse(_)));
    }
}
