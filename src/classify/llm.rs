// src/classify/llm.rs

use crate::groq::GroqClient;
use crate::utils::error::GroqError;

/// Remote page classifier: asks a hosted model whether the page is an
/// editorial and expects a strict YES/NO answer.
pub struct LlmClassifier {
    client: GroqClient,
}

impl LlmClassifier {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    /// Builds a classifier against the Groq API, reading the key from the
    /// environment.
    pub fn from_env(model: &str) -> Result<Self, GroqError> {
        Ok(Self::new(GroqClient::from_env(model)?))
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub async fn is_editorial(&self, text: &str) -> Result<bool, GroqError> {
        // Blank pages are never editorial; skip the network round trip.
        if text.trim().is_empty() {
            return Ok(false);
        }

        let prompt = build_prompt(text);
        let answer = self.client.complete(&prompt).await?;
        Ok(answer_is_yes(&answer))
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "You are a document classifier.\n\
         Determine if the following page is an 'editorial' or 'opinion piece' \
         from a newspaper. Answer strictly with YES or NO.\n\n\
         Page content:\n{text}"
    )
}

fn answer_is_yes(answer: &str) -> bool {
    answer.trim().to_uppercase() == "YES"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier_for(server: &mockito::ServerGuard) -> LlmClassifier {
        let client = GroqClient::with_base_url(
            "test-key".to_string(),
            "llama-3.1-8b-instant".to_string(),
            server.url(),
        )
        .unwrap();
        LlmClassifier::new(client)
    }

    #[test]
    fn answer_parsing_tolerates_case_and_whitespace() {
        assert!(answer_is_yes("YES"));
        assert!(answer_is_yes("  yes\n"));
        assert!(!answer_is_yes("NO"));
        assert!(!answer_is_yes("YES, definitely"));
        assert!(!answer_is_yes(""));
    }

    #[test]
    fn prompt_embeds_the_page_text() {
        let prompt = build_prompt("Letters from readers");
        assert!(prompt.contains("Letters from readers"));
        assert!(prompt.contains("YES or NO"));
    }

    #[tokio::test]
    async fn blank_page_short_circuits_without_a_request() {
        let server = mockito::Server::new_async().await;
        // No mock is registered; any request would fail the test with a
        // connection to an unexpected route.
        let classifier = classifier_for(&server);

        assert!(!classifier.is_editorial("   \n").await.unwrap());
    }

    #[tokio::test]
    async fn yes_answer_classifies_as_editorial() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"YES"}}]}"#)
            .create_async()
            .await;

        let classifier = classifier_for(&server);
        assert!(classifier.is_editorial("Our view on the budget").await.unwrap());
    }

    #[tokio::test]
    async fn no_answer_classifies_as_not_editorial() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"NO"}}]}"#)
            .create_async()
            .await;

        let classifier = classifier_for(&server);
        assert!(!classifier.is_editorial("Box scores").await.unwrap());
    }

    #[tokio::test]
    async fn server_failure_surfaces_as_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(503)
            .create_async()
            .await;

        let classifier = classifier_for(&server);
        assert!(classifier.is_editorial("Some page text").await.is_err());
    }
}
