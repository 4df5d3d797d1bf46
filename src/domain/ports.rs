use crate::utils::error::Result;

/// Anything that can spell an integer literal in words.
pub trait TextGenerator: Send + Sync {
    fn generate_text(&self, source: &str) -> Result<String>;

    /// Reports whether `generate_text` would succeed, without producing text.
    fn can_generate(&self, source: &str) -> bool;
}
