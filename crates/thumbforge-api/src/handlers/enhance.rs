//! Prompt enhancement endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;

use super::build_request;

/// Enhance prompt request body. Fields are checked by hand so a wrong type
/// surfaces as a validation error, not a decode failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancePromptRequest {
    pub prompt: Option<Value>,
    pub style: Option<Value>,
    pub video_title: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancePromptResponse {
    pub enhanced_prompt: String,
    pub original_prompt: String,
    pub video_title: Option<String>,
}

/// Enhance a thumbnail idea.
///
/// POST /api/generate/enhance-prompt
pub async fn enhance_prompt(
    State(state): State<AppState>,
    body: Result<Json<EnhancePromptRequest>, JsonRejection>,
) -> ApiResult<Json<EnhancePromptResponse>> {
    let Json(body) = body?;
    let request = build_request(body.prompt, body.style, body.video_title)?;

    let enhanced = state.enhancer.enhance(&request).await;
    info!(style = %request.style(), "Enhanced prompt: {}", enhanced.text);

    Ok(Json(EnhancePromptResponse {
        enhanced_prompt: enhanced.text,
        original_prompt: enhanced.source_prompt,
        video_title: enhanced.video_title,
    }))
}
