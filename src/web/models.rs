use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who spoke a turn. The set is closed; anything else is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// A single chat turn. Immutable once created; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat`: the caller supplies the whole conversation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of `POST /api/converse`: one new user turn for a server-held session.
/// A missing session id means "start a new session".
#[derive(Debug, Serialize, Deserialize)]
pub struct ConverseRequest {
    pub message: String,
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConverseResponse {
    pub response: String,
    pub session_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_round_trip() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"assistant\"").unwrap(),
            Role::Assistant
        );
    }

    #[test]
    fn conversation_round_trip_preserves_order_and_fields() {
        let conversation = vec![
            Message::user("Hello!"),
            Message::assistant("Hi there!"),
            Message::user("How are you?"),
        ];
        let wire = serde_json::to_string(&conversation).unwrap();
        let back: Vec<Message> = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, conversation);
    }

    #[test]
    fn message_requires_role() {
        let err = serde_json::from_str::<Message>(r#"{"content":"Hello!"}"#).unwrap_err();
        assert!(err.to_string().contains("role"));
    }

    #[test]
    fn message_requires_content() {
        let err = serde_json::from_str::<Message>(r#"{"role":"user"}"#).unwrap_err();
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn message_rejects_unknown_role() {
        assert!(serde_json::from_str::<Message>(r#"{"role":"robot","content":"hi"}"#).is_err());
    }

    #[test]
    fn message_rejects_non_string_content() {
        assert!(serde_json::from_str::<Message>(r#"{"role":"user","content":42}"#).is_err());
    }
}
