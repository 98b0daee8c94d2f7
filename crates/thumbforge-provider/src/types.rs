//! Chat-completions request types.

use serde::Serialize;

const IMAGE_MAX_TOKENS: u32 = 1024;
const IMAGE_TEMPERATURE: f32 = 0.7;
const REWRITE_MAX_TOKENS: u32 = 300;
const REWRITE_TEMPERATURE: f32 = 0.7;

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modalities: Option<Vec<&'static str>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    /// A single-turn request asking the model to draw `prompt`.
    pub fn image(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: Role::User,
                content: MessageContent::Parts(vec![ContentPart::Text {
                    text: prompt.to_string(),
                }]),
            }],
            modalities: Some(vec!["image", "text"]),
            max_tokens: IMAGE_MAX_TOKENS,
            temperature: IMAGE_TEMPERATURE,
        }
    }

    /// A system + user text exchange.
    pub fn text(model: &str, system: &str, user: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: MessageContent::Text(system.to_string()),
                },
                ChatMessage {
                    role: Role::User,
                    content: MessageContent::Text(user.to_string()),
                },
            ],
            modalities: None,
            max_tokens: REWRITE_MAX_TOKENS,
            temperature: REWRITE_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_request_shape() {
        let request = ChatRequest::image("nousresearch/nano-banana-pro", "a cat. anime style");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "nousresearch/nano-banana-pro");
        assert_eq!(
            value["messages"],
            json!([{
                "role": "user",
                "content": [{ "type": "text", "text": "a cat. anime style" }]
            }])
        );
        assert_eq!(value["modalities"], json!(["image", "text"]));
        assert_eq!(value["max_tokens"], 1024);
        assert!(value["temperature"].is_number());
    }

    #[test]
    fn test_text_request_shape() {
        let request = ChatRequest::text("openai/gpt-4o-mini", "be brief", "a cat");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "be brief");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "a cat");
        assert!(value.get("modalities").is_none());
    }
}
