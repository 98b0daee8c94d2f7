//! Style catalog endpoint.

use axum::Json;
use serde::Serialize;

use thumbforge_models::{StyleEntry, ThumbnailStyle, DEFAULT_STYLE_ID};

#[derive(Debug, Serialize)]
pub struct StylesResponse {
    pub styles: Vec<StyleEntry>,
    pub default: &'static str,
}

/// GET /api/styles
pub async fn list_styles() -> Json<StylesResponse> {
    Json(StylesResponse {
        styles: ThumbnailStyle::catalog(),
        default: DEFAULT_STYLE_ID,
    })
}
