pub mod client;
pub mod error;
pub mod models;

pub use client::{EditedImage, GeminiClient};
pub use error::GeminiError;
pub use models::{Candidate, Content, GenerateContentResponse, InlineData, Part, UsageMetadata};
