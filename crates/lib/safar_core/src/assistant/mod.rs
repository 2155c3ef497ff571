//! Chat assistant — reply generation for the travel chat endpoint.
//!
//! Supports provider dispatch so a hosted model can be substituted without
//! touching request handling. The only provider shipped today is `"rules"`,
//! a deterministic keyword classifier over canned responses.
//!
//! # Public API
//!
//! - [`generate_reply`] — produce an assistant reply for a conversation
//! - [`AssistantConfig`] — resolved assistant configuration
//! - [`rules`] — the rule-based responder
//!
//! # Providers
//!
//! - `"rules"` — keyword classification with canned responses (offline,
//!   no external deps)

pub mod rules;

use thiserror::Error;

use crate::models::chat::ChatMessage;

/// Errors that can occur while generating a reply.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Unsupported assistant provider: {0}")]
    UnsupportedProvider(String),

    #[error("Assistant unavailable: {0}")]
    Unavailable(String),
}

/// Resolved assistant configuration.
#[derive(Clone, Debug)]
pub struct AssistantConfig {
    /// Reply provider: `"rules"`.
    pub provider: String,
}

impl AssistantConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable             | Default  |
    /// |----------------------|----------|
    /// | `ASSISTANT_PROVIDER` | `rules`  |
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("ASSISTANT_PROVIDER").unwrap_or_else(|_| "rules".into()),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: "rules".into(),
        }
    }
}

/// Generate a reply to a conversation.
///
/// Only the last message is consulted; earlier turns are accepted for
/// future providers that use the full history.
///
/// Dispatches based on `config.provider`:
/// - `"rules"` → deterministic keyword classifier
pub async fn generate_reply(
    config: &AssistantConfig,
    history: &[ChatMessage],
) -> Result<String, AssistantError> {
    match config.provider.as_str() {
        "rules" => Ok(rules::reply(history)),
        other => Err(AssistantError::UnsupportedProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Role;

    fn user(content: &str) -> ChatMessage {
        ChatMessage {
            role: Role::User,
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn rules_provider_replies() {
        let config = AssistantConfig::default();
        let reply = generate_reply(&config, &[user("Hi")])
            .await
            .expect("reply");
        assert!(!reply.is_empty());
    }

    #[tokio::test]
    async fn unknown_provider_is_rejected() {
        let config = AssistantConfig {
            provider: "gpt-42".into(),
        };
        let err = generate_reply(&config, &[user("Hi")])
            .await
            .expect_err("should reject unknown provider");
        assert!(matches!(err, AssistantError::UnsupportedProvider(p) if p == "gpt-42"));
    }
}
