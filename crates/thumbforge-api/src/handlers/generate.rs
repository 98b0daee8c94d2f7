//! Thumbnail generation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use thumbforge_models::GenerationResult;

use crate::error::ApiResult;
use crate::state::AppState;

use super::build_request;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateThumbnailRequest {
    pub prompt: Option<Value>,
    pub style: Option<Value>,
    pub video_title: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateThumbnailResponse {
    pub image_url: String,
    /// Final composed prompt sent to the provider
    pub prompt: String,
    pub style: String,
    pub video_title: Option<String>,
    pub metadata: ThumbnailMetadata,
}

#[derive(Debug, Serialize)]
pub struct ThumbnailMetadata {
    pub model: String,
    pub resolution: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<GenerationResult> for GenerateThumbnailResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            image_url: result.image_ref,
            prompt: result.final_prompt,
            style: result.style.id().to_string(),
            video_title: result.video_title,
            metadata: ThumbnailMetadata {
                model: result.provider.provider_name,
                resolution: result.provider.resolution.to_string(),
                format: result.provider.format.to_string(),
                note: result.provider.note,
            },
        }
    }
}

/// Generate a thumbnail image.
///
/// POST /api/generate/thumbnail
pub async fn generate_thumbnail(
    State(state): State<AppState>,
    body: Result<Json<GenerateThumbnailRequest>, JsonRejection>,
) -> ApiResult<Json<GenerateThumbnailResponse>> {
    let Json(body) = body?;
    let request = build_request(body.prompt, body.style, body.video_title)?;

    let result = state.requester.request_thumbnail(&request).await?;
    Ok(Json(result.into()))
}
