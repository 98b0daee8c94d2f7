//! Response adapters.
//!
//! This is the only place that assumes anything about the shape of a
//! chat-completions response.

use serde_json::Value;

/// Outcome of looking for an image in a provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageExtraction {
    Found(String),
    NotFound,
}

/// Find the image reference in `choices[0].message`.
///
/// Checked in order: the `images` array of image-capable models, a plain
/// string `content`, then an `image_url` part inside array `content`.
pub fn extract_image_ref(payload: &Value) -> ImageExtraction {
    let Some(message) = first_message(payload) else {
        return ImageExtraction::NotFound;
    };

    let from_images = message
        .get("images")
        .and_then(Value::as_array)
        .and_then(|images| images.iter().find_map(image_url_of));

    let found = from_images
        .or_else(|| message.get("content").and_then(non_blank_str))
        .or_else(|| {
            message
                .get("content")
                .and_then(Value::as_array)
                .and_then(|parts| {
                    parts
                        .iter()
                        .filter(|part| part.get("type").and_then(Value::as_str) == Some("image_url"))
                        .find_map(image_url_of)
                })
        });

    match found {
        Some(image_ref) => ImageExtraction::Found(image_ref),
        None => ImageExtraction::NotFound,
    }
}

/// Text reply in `choices[0].message.content`, trimmed.
pub fn extract_message_text(payload: &Value) -> Option<String> {
    first_message(payload)?.get("content").and_then(non_blank_str)
}

fn first_message(payload: &Value) -> Option<&Value> {
    payload
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")
}

/// `{ "image_url": { "url": ... } }` or `{ "image_url": "..." }`
fn image_url_of(item: &Value) -> Option<String> {
    let image_url = item.get("image_url")?;
    image_url
        .get("url")
        .and_then(non_blank_str)
        .or_else(|| non_blank_str(image_url))
}

fn non_blank_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string_content() {
        let payload = json!({
            "choices": [{ "message": { "role": "assistant", "content": "https://cdn.example.com/t.png" } }]
        });
        assert_eq!(
            extract_image_ref(&payload),
            ImageExtraction::Found("https://cdn.example.com/t.png".to_string())
        );
    }

    #[test]
    fn test_images_array_takes_precedence() {
        let payload = json!({
            "choices": [{
                "message": {
                    "content": "Here is your thumbnail",
                    "images": [{ "type": "image_url", "image_url": { "url": "data:image/png;base64,AAAA" } }]
                }
            }]
        });
        assert_eq!(
            extract_image_ref(&payload),
            ImageExtraction::Found("data:image/png;base64,AAAA".to_string())
        );
    }

    #[test]
    fn test_image_part_in_content_array() {
        let payload = json!({
            "choices": [{
                "message": {
                    "content": [
                        { "type": "text", "text": "done" },
                        { "type": "image_url", "image_url": { "url": "https://cdn.example.com/x.png" } }
                    ]
                }
            }]
        });
        assert_eq!(
            extract_image_ref(&payload),
            ImageExtraction::Found("https://cdn.example.com/x.png".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty_content_is_not_found() {
        for payload in [
            json!({}),
            json!({ "choices": [] }),
            json!({ "choices": [{ "message": {} }] }),
            json!({ "choices": [{ "message": { "content": null } }] }),
            json!({ "choices": [{ "message": { "content": "   " } }] }),
            json!({ "choices": [{ "message": { "images": [] } }] }),
            json!({ "choices": [{ "message": { "content": [{ "type": "text", "text": "no image" }] } }] }),
        ] {
            assert_eq!(extract_image_ref(&payload), ImageExtraction::NotFound, "{}", payload);
        }
    }

    #[test]
    fn test_extract_message_text() {
        let payload = json!({
            "choices": [{ "message": { "content": "  A chef mid-toss, pasta arcing overhead.  " } }]
        });
        assert_eq!(
            extract_message_text(&payload).as_deref(),
            Some("A chef mid-toss, pasta arcing overhead.")
        );
        assert_eq!(extract_message_text(&json!({ "choices": [] })), None);
    }
}
