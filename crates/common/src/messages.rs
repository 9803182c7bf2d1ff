use faststr::FastStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    Assistant,
    User,
}

#[allow(dead_code)]
impl MessageRole {
    pub fn is_system(&self) -> bool {
        matches!(self, MessageRole::System)
    }

    pub fn is_user(&self) -> bool {
        matches!(self, MessageRole::User)
    }

    pub fn is_assistant(&self) -> bool {
        matches!(self, MessageRole::Assistant)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub role:    MessageRole,
    pub content: FastStr,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            role:    MessageRole::User,
            content: "".into(),
        }
    }
}

impl Message {
    pub fn new<T>(role: MessageRole, content: T) -> Self
    where
        T: Into<FastStr>,
    {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system<T>(content: T) -> Self
    where
        T: Into<FastStr>,
    {
        Self::new(MessageRole::System, content)
    }

    pub fn user<T>(content: T) -> Self
    where
        T: Into<FastStr>,
    {
        Self::new(MessageRole::User, content)
    }
}
