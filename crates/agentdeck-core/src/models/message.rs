use serde::{Deserialize, Serialize};

use super::attachment::Attachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Agent,
    System,
}

/// One entry in the conversation transcript.
///
/// Messages are append-only: once constructed and handed to the store they
/// are never mutated or removed, and insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub kind: MessageKind,
    pub content: String,
    /// Unix millis at creation
    pub timestamp: u64,
    /// Responding agent for agent-kind messages.
    /// A non-owning reference; never validated against the agent list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_without_optional_fields() {
        let msg = Message {
            id: "msg-1".to_string(),
            kind: MessageKind::System,
            content: "Task stopped".to_string(),
            timestamp: 1_700_000_000_000,
            agent_id: None,
            attachments: Vec::new(),
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("agent_id"));
        assert!(!json.contains("attachments"));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, MessageKind::System);
        assert!(back.agent_id.is_none());
        assert!(!back.has_attachments());
    }
}
