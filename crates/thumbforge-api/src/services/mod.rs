//! Generation pipeline services.

pub mod enhancer;
pub mod thumbnail;

pub use enhancer::PromptEnhancer;
pub use thumbnail::{GenerationMode, ThumbnailRequester};
