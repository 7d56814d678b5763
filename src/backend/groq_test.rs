use super::*;
use mockito::Matcher;
use serde_json::json;

fn setup_backend(url: &str) -> Groq {
    Groq::default()
        .with_endpoint(url)
        .with_api_key("test_token")
}

#[tokio::test]
async fn test_complete_returns_first_choice() {
    let body = serde_json::to_string(&CompletionResponse {
        id: "cmpl-1".to_string(),
        choices: vec![
            CompletionChoiceResponse {
                message: CompletionMessageResponse {
                    content: Some("Hi there".to_string()),
                },
                finish_reason: Some("stop".to_string()),
            },
            CompletionChoiceResponse {
                message: CompletionMessageResponse {
                    content: Some("ignored".to_string()),
                },
                finish_reason: Some("stop".to_string()),
            },
        ],
    })
    .unwrap();

    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .match_header("Authorization", "Bearer test_token")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama3-70b-8192",
            "max_tokens": 3000,
            "temperature": 0.5,
            "stream": false,
            "messages": [{"role": "user", "content": "Hello"}],
        })))
        .with_body(body)
        .create_async()
        .await;

    let backend = setup_backend(&server.url());
    let res = backend.complete("Hello").await.expect("completion failed");

    assert_eq!(res.as_deref(), Some("Hi there"));
    handler.assert_async().await;
}

#[tokio::test]
async fn test_complete_injects_system_instruction() {
    let body = serde_json::to_string(&CompletionResponse {
        id: "cmpl-2".to_string(),
        choices: vec![CompletionChoiceResponse {
            message: CompletionMessageResponse {
                content: Some("```rust\nfn main() {}\n```".to_string()),
            },
            finish_reason: Some("stop".to_string()),
        }],
    })
    .unwrap();

    let mut server = mockito::Server::new_async().await;
    let handler = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                {"role": "system", "content": CODE_TAG_PROMPT},
                {"role": "user", "content": "Show me main"},
            ],
        })))
        .with_body(body)
        .create_async()
        .await;

    let backend = setup_backend(&server.url()).with_tag_code_blocks(true);
    let res = backend
        .complete("Show me main")
        .await
        .expect("completion failed");

    assert!(res.unwrap().starts_with("```rust"));
    handler.assert_async().await;
}

#[tokio::test]
async fn test_complete_no_choices() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"id": "cmpl-3", "choices": []}"#)
        .create_async()
        .await;

    let backend = setup_backend(&server.url());
    let res = backend.complete("Hello").await.expect("completion failed");
    assert!(res.is_none());
}

#[tokio::test]
async fn test_complete_null_content() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"id": "cmpl-4", "choices": [{"message": {"content": null}}]}"#)
        .create_async()
        .await;

    let backend = setup_backend(&server.url());
    let res = backend.complete("Hello").await.expect("completion failed");
    assert!(res.is_none());
}

#[tokio::test]
async fn test_complete_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(429)
        .with_body(r#"{"error": {"message": "rate limit reached", "type": "tokens"}}"#)
        .create_async()
        .await;

    let backend = setup_backend(&server.url());
    let err = backend
        .complete("Hello")
        .await
        .expect_err("expected an error");

    let api_err = err.downcast::<ApiError>().expect("expected an ApiError");
    assert_eq!(api_err.http_code, 429);
    assert_eq!(api_err.message, "rate limit reached");
}
