use super::*;
use crate::backend::MockBackend;
use std::time::Duration;

async fn run_one_action(backend: MockBackend, action: Action) -> Event {
    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let token = CancellationToken::new();

    let mut service = ActionService::new(Arc::new(backend), action_rx, event_tx, token.clone());
    let handle = tokio::spawn(async move { service.run().await });

    action_tx.send(action).expect("sending action");
    let event = tokio::time::timeout(Duration::from_secs(5), event_rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed");

    token.cancel();
    handle.await.expect("joining service").expect("service failed");
    event
}

#[tokio::test]
async fn test_completion_request_reports_reply() {
    let mut backend = MockBackend::new();
    backend
        .expect_complete()
        .returning(|_| Box::pin(async { Ok(Some("Hi there".to_string())) }));

    let event = run_one_action(backend, Action::CompletionRequest("Hello".to_string())).await;
    match event {
        Event::TurnCompleted(TurnOutcome::Reply(text)) => assert_eq!(text, "Hi there"),
        event => panic!("unexpected event: {:?}", event),
    }
}

#[tokio::test]
async fn test_completion_request_reports_empty() {
    let mut backend = MockBackend::new();
    backend.expect_complete().returning(|_| Box::pin(async { Ok(None) }));

    let event = run_one_action(backend, Action::CompletionRequest("Hello".to_string())).await;
    assert!(matches!(
        event,
        Event::TurnCompleted(TurnOutcome::Empty)
    ));
}

#[tokio::test]
async fn test_completion_request_reports_failure() {
    let mut backend = MockBackend::new();
    backend
        .expect_complete()
        .returning(|_| Box::pin(async { Err(eyre::eyre!("connection refused")) }));

    let event = run_one_action(backend, Action::CompletionRequest("Hello".to_string())).await;
    match event {
        Event::TurnCompleted(TurnOutcome::Failed(reason)) => {
            assert!(reason.contains("connection refused"));
        }
        event => panic!("unexpected event: {:?}", event),
    }
}
