use common::messages::Message;
use faststr::FastStr;
use serde::{Deserialize, Serialize};

/// What the chat page posts to `/api/chat`. `key`, `prompt` and
/// `temperature` are optional; the handler fills in the app defaults.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ChatBody {
    pub model:       FastStr,
    pub messages:    Vec<Message>,
    #[serde(default)]
    pub key:         FastStr,
    #[serde(default)]
    pub prompt:      FastStr,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[cfg(test)]
mod tests {

    use super::*;
    use common::messages::MessageRole;

    #[test]
    fn test_chat_body() {
        let full: Result<ChatBody, _> = serde_json::from_str(FULL_REQ);
        let full = full.expect("failed to parse full request");
        assert_eq!(full.model.as_str(), "gpt-4");
        assert_eq!(full.messages.len(), 2);
        assert!(full.messages[1].role.is_user());
        assert_eq!(full.temperature, Some(0.7));

        let minimal: Result<ChatBody, _> = serde_json::from_str(MINIMAL_REQ);
        let minimal = minimal.expect("failed to parse minimal request");
        assert!(minimal.key.is_empty());
        assert!(minimal.prompt.is_empty());
        assert_eq!(minimal.temperature, None);
        assert_eq!(minimal.messages[0].role, MessageRole::User);
    }

    const FULL_REQ: &str = r#"
        {
  "model": "gpt-4",
  "key": "sk-user",
  "prompt": "You are a terse assistant.",
  "temperature": 0.7,
  "messages": [
    {
      "role": "assistant",
      "content": "How can I help?"
    },
    {
      "role": "user",
      "content": "Summarize the experiments index."
    }
  ]
}
    "#;

    const MINIMAL_REQ: &str = r#"
    {
  "model": "gpt-35-turbo",
  "messages": [
    {
      "role": "user",
      "content": "hello"
    }
  ]
}
    "#;
}
