//! Post / Comment Text Value Object

use kernel::error::app_error::AppResult;
use kernel::validation::FieldErrors;

/// Non-blank, trimmed body of a post or comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    /// Rejects blank text with a `text` field error
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = raw.as_ref().trim();

        let mut errors = FieldErrors::new();
        errors.require("text", trimmed, "Text is required");
        errors.into_result()?;

        Ok(Self(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
