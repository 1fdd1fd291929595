use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Experimental condition selecting the system prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    A,
    B,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::A => "A",
            Variant::B => "B",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        prompt::system_prompt(Some(self.as_str()))
    }
}

pub type BodyError = serde_path_to_error::Error<serde_json::Error>;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub variant: Variant,
    /// Free-form client metadata. Only ever logged.
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
}

impl ChatRequest {
    /// Parses a request body, reporting the path of the offending field on
    /// failure (e.g. `messages[1].role`).
    pub fn from_json(body: &[u8]) -> Result<Self, BodyError> {
        let de = &mut serde_json::Deserializer::from_slice(body);
        serde_path_to_error::deserialize(de)
    }

    /// Conversation as sent upstream: the variant's system prompt followed by
    /// the client messages in their original order.
    pub fn into_conversation(self) -> Vec<Message> {
        let mut conversation = Vec::with_capacity(self.messages.len() + 1);
        conversation.push(Message::system(self.variant.system_prompt()));
        conversation.extend(self.messages);
        conversation
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
