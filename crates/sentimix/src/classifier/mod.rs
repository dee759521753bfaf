//! classifier module
pub mod chat_completion;
pub mod remote_classifier;

pub use chat_completion::ChatCompletionClient;
pub use remote_classifier::RemoteClassifier;

/// System instruction sent with every classification request.
pub const SYSTEM_PROMPT: &str = "You are a sentiment classifier. Read the user's text and answer \
  with exactly one of these two phrases and nothing else: \"Healthy sentiment\" or \
  \"Unhealthy sentiment\". Do not add punctuation, explanations or any other content.";
