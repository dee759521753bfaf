//! crates/sentimix/tests/classifier_test.rs
//!
//! RemoteClassifier against a local chat-completion stand-in (wiremock).
//! Covers the request shape, verbatim pass-through, and every failure path
//! that must collapse to the failure placeholder.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentimix::classifier::{RemoteClassifier, SYSTEM_PROMPT};
use sentimix::config::{ClassifierConfig, SentimixConfig};
use sentimix::errors::ClassifierError;
use sentimix::models::{Classification, FAILED_MESSAGE, HEALTHY_LABEL, UNAVAILABLE_MESSAGE};
use sentimix::service::SentimixService;

fn config_for(server: &MockServer) -> ClassifierConfig {
  ClassifierConfig {
    api_key: Some("sk-test".to_string()),
    base_url: server.uri(),
    timeout: Duration::from_secs(2),
    ..Default::default()
  }
}

fn completion(content: &str) -> serde_json::Value {
  json!({
    "id": "chatcmpl-test",
    "object": "chat.completion",
    "model": "gpt-4o-mini",
    "choices": [
      { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
    ]
  })
}

#[tokio::test]
async fn sends_fixed_prompt_and_returns_label() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .and(header("authorization", "Bearer sk-test"))
    .and(body_partial_json(json!({
      "model": "gpt-4o-mini",
      "temperature": 0.1,
      "max_tokens": 10,
      "messages": [
        { "role": "system", "content": SYSTEM_PROMPT },
        { "role": "user", "content": "I love this!" }
      ]
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(completion(HEALTHY_LABEL)))
    .expect(1)
    .mount(&server)
    .await;

  let classifier = RemoteClassifier::from_config(&config_for(&server));
  assert!(classifier.is_enabled());

  let classification = classifier.classify("I love this!").await;
  assert!(matches!(&classification, Classification::Label(label) if label == HEALTHY_LABEL));
  assert_eq!(classification.as_display(), "Healthy sentiment");
}

#[tokio::test]
async fn off_contract_reply_is_passed_through() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .respond_with(ResponseTemplate::new(200).set_body_json(completion("Healthy sentiment.")))
    .mount(&server)
    .await;

  let classifier = RemoteClassifier::from_config(&config_for(&server));
  let classification = classifier.classify("nice").await;

  assert_eq!(classification.as_display(), "Healthy sentiment.");
  assert!(!classification.is_expected_label());
}

#[tokio::test]
async fn provider_error_status_fails_softly() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .respond_with(
      ResponseTemplate::new(500).set_body_json(json!({ "error": { "message": "upstream down" } })),
    )
    .mount(&server)
    .await;

  let classifier = RemoteClassifier::from_config(&config_for(&server));
  let classification = classifier.classify("I love this!").await;

  match &classification {
    Classification::Failed(ClassifierError::Status { status, body }) => {
      assert_eq!(*status, 500);
      assert!(body.contains("upstream down"));
    }
    other => panic!("expected status failure, got {other:?}"),
  }
  assert_eq!(classification.as_display(), FAILED_MESSAGE);
}

#[tokio::test]
async fn malformed_body_fails_softly() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
    .mount(&server)
    .await;

  let classifier = RemoteClassifier::from_config(&config_for(&server));
  let classification = classifier.classify("I love this!").await;

  assert!(matches!(classification, Classification::Failed(ClassifierError::MalformedResponse(_))));
  assert_eq!(classification.as_display(), FAILED_MESSAGE);
}

#[tokio::test]
async fn empty_choices_fail_softly() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
    .mount(&server)
    .await;

  let classifier = RemoteClassifier::from_config(&config_for(&server));
  let classification = classifier.classify("I love this!").await;

  assert!(matches!(classification, Classification::Failed(ClassifierError::EmptyCompletion)));
}

#[tokio::test]
async fn slow_provider_times_out() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(completion(HEALTHY_LABEL))
        .set_delay(Duration::from_secs(3)),
    )
    .mount(&server)
    .await;

  let config = ClassifierConfig { timeout: Duration::from_millis(200), ..config_for(&server) };
  let classifier = RemoteClassifier::from_config(&config);
  let classification = classifier.classify("I love this!").await;

  match &classification {
    Classification::Failed(err) => assert!(err.is_timeout(), "expected timeout, got {err}"),
    other => panic!("expected failure, got {other:?}"),
  }
  assert_eq!(classification.as_display(), FAILED_MESSAGE);
}

#[tokio::test]
async fn failure_is_not_sticky() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .respond_with(ResponseTemplate::new(503))
    .up_to_n_times(1)
    .mount(&server)
    .await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .respond_with(ResponseTemplate::new(200).set_body_json(completion("Unhealthy sentiment")))
    .mount(&server)
    .await;

  let classifier = RemoteClassifier::from_config(&config_for(&server));

  assert_eq!(classifier.classify("awful").await.as_display(), FAILED_MESSAGE);
  assert_eq!(classifier.classify("awful").await.as_display(), "Unhealthy sentiment");
}

#[tokio::test]
async fn disabled_classifier_never_calls_out() {
  let server = MockServer::start().await;

  Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let config = ClassifierConfig { api_key: None, ..config_for(&server) };
  let service = SentimixService::init(&SentimixConfig { classifier: config }).unwrap();

  let result = service.aggregate("I love this!").await;
  assert_eq!(result.classification.as_display(), UNAVAILABLE_MESSAGE);
  assert!(result.lexicon.compound > 0.0);
}

#[tokio::test]
async fn remote_failure_keeps_local_scores() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/chat/completions"))
    .respond_with(ResponseTemplate::new(401))
    .mount(&server)
    .await;

  let service =
    SentimixService::init(&SentimixConfig { classifier: config_for(&server) }).unwrap();
  let result = service.aggregate("I love this!").await;

  assert_eq!(result.classification.as_display(), FAILED_MESSAGE);
  assert!(result.lexicon.compound > 0.0);
  assert!(result.statistical.polarity > 0.0);
}
