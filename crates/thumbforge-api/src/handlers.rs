//! Request handlers.

pub mod enhance;
pub mod generate;
pub mod health;
pub mod styles;

pub use enhance::*;
pub use generate::*;
pub use health::*;
pub use styles::*;

use serde_json::Value;

use thumbforge_models::GenerationRequest;

use crate::error::ApiResult;

/// The text of a loosely-typed JSON field. Anything but a string counts as absent.
fn text_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Validate the shared `prompt` / `style` / `videoTitle` fields.
fn build_request(
    prompt: Option<Value>,
    style: Option<Value>,
    video_title: Option<Value>,
) -> ApiResult<GenerationRequest> {
    let style = text_field(style);
    Ok(GenerationRequest::from_parts(
        text_field(prompt),
        style.as_deref(),
        text_field(video_title),
    )?)
}
