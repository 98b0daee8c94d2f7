//! Thumbnail style catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of the style used when a request names none or an unknown one.
pub const DEFAULT_STYLE_ID: &str = "photorealistic";

/// Visual styles a thumbnail can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThumbnailStyle {
    /// Studio photography look
    #[default]
    Photorealistic,
    #[serde(rename = "3d-render")]
    Render3d,
    Anime,
    Illustration,
    /// Movie poster lighting and framing
    Cinematic,
    VibrantPop,
    DarkMoody,
    Minimalist,
}

impl ThumbnailStyle {
    /// Every style in catalog order. The first entry is the default.
    pub const ALL: &'static [ThumbnailStyle] = &[
        ThumbnailStyle::Photorealistic,
        ThumbnailStyle::Render3d,
        ThumbnailStyle::Anime,
        ThumbnailStyle::Illustration,
        ThumbnailStyle::Cinematic,
        ThumbnailStyle::VibrantPop,
        ThumbnailStyle::DarkMoody,
        ThumbnailStyle::Minimalist,
    ];

    /// Resolve an optional style identifier against the catalog.
    ///
    /// Missing, blank and unknown identifiers all resolve to the default
    /// style, so this never fails.
    pub fn resolve(style_id: Option<&str>) -> ThumbnailStyle {
        style_id
            .and_then(|id| id.parse().ok())
            .unwrap_or_default()
    }

    /// Stable identifier used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            ThumbnailStyle::Photorealistic => "photorealistic",
            ThumbnailStyle::Render3d => "3d-render",
            ThumbnailStyle::Anime => "anime",
            ThumbnailStyle::Illustration => "illustration",
            ThumbnailStyle::Cinematic => "cinematic",
            ThumbnailStyle::VibrantPop => "vibrant-pop",
            ThumbnailStyle::DarkMoody => "dark-moody",
            ThumbnailStyle::Minimalist => "minimalist",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            ThumbnailStyle::Photorealistic => "Photorealistic",
            ThumbnailStyle::Render3d => "3D Render",
            ThumbnailStyle::Anime => "Anime",
            ThumbnailStyle::Illustration => "Illustration",
            ThumbnailStyle::Cinematic => "Cinematic",
            ThumbnailStyle::VibrantPop => "Vibrant Pop",
            ThumbnailStyle::DarkMoody => "Dark Moody",
            ThumbnailStyle::Minimalist => "Minimalist",
        }
    }

    /// Prompt fragment appended to the user's idea for this style.
    pub fn modifier(&self) -> &'static str {
        match self {
            ThumbnailStyle::Photorealistic => {
                "photorealistic, professional photography, high detail, sharp focus, studio lighting"
            }
            ThumbnailStyle::Render3d => {
                "3D render, octane render, cinema 4d, highly detailed 3D model, professional 3D graphics"
            }
            ThumbnailStyle::Anime => {
                "anime style, manga art, vibrant anime colors, detailed anime illustration"
            }
            ThumbnailStyle::Illustration => {
                "digital illustration, professional artwork, detailed illustration style, artistic"
            }
            ThumbnailStyle::Cinematic => {
                "cinematic lighting, movie poster style, dramatic composition, film photography"
            }
            ThumbnailStyle::VibrantPop => {
                "vibrant colors, pop art style, bold and colorful, high saturation, energetic"
            }
            ThumbnailStyle::DarkMoody => {
                "dark moody atmosphere, dramatic shadows, low key lighting, cinematic darkness"
            }
            ThumbnailStyle::Minimalist => {
                "minimalist design, clean composition, simple and elegant, minimal elements"
            }
        }
    }

    /// Catalog row for this style.
    pub fn entry(&self) -> StyleEntry {
        StyleEntry {
            id: self.id(),
            label: self.label(),
            modifier: self.modifier(),
        }
    }

    /// The full catalog in display order.
    pub fn catalog() -> Vec<StyleEntry> {
        Self::ALL.iter().map(ThumbnailStyle::entry).collect()
    }
}

impl fmt::Display for ThumbnailStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ThumbnailStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.id() == wanted)
            .ok_or_else(|| StyleParseError(s.to_string()))
    }
}

#[derive(Debug, Error)]
#[error("Unknown style: {0}")]
pub struct StyleParseError(String);

/// A row of the style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub modifier: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_catalog_entry() {
        assert_eq!(ThumbnailStyle::default(), ThumbnailStyle::ALL[0]);
        assert_eq!(ThumbnailStyle::default().id(), DEFAULT_STYLE_ID);
    }

    #[test]
    fn test_resolve_known_ids() {
        for style in ThumbnailStyle::ALL {
            assert_eq!(ThumbnailStyle::resolve(Some(style.id())), *style);
        }
        assert_eq!(ThumbnailStyle::resolve(Some("3d-render")), ThumbnailStyle::Render3d);
    }

    #[test]
    fn test_resolve_is_case_and_whitespace_insensitive() {
        assert_eq!(ThumbnailStyle::resolve(Some("  Anime ")), ThumbnailStyle::Anime);
        assert_eq!(ThumbnailStyle::resolve(Some("DARK-MOODY")), ThumbnailStyle::DarkMoody);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(ThumbnailStyle::resolve(None), ThumbnailStyle::Photorealistic);
        assert_eq!(ThumbnailStyle::resolve(Some("")), ThumbnailStyle::Photorealistic);
        assert_eq!(ThumbnailStyle::resolve(Some("watercolor")), ThumbnailStyle::Photorealistic);
        assert_eq!(ThumbnailStyle::resolve(Some("3d_render")), ThumbnailStyle::Photorealistic);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("vaporwave".parse::<ThumbnailStyle>().is_err());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = ThumbnailStyle::catalog();
        assert_eq!(catalog.len(), 8);
        let mut ids: Vec<_> = catalog.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_serde_uses_catalog_ids() {
        for style in ThumbnailStyle::ALL {
            let json = serde_json::to_string(style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.id()));
        }
    }
}
