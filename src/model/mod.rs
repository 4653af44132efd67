//! # Quote Model
//!
//! The record type held by the store, plus the validation contract
//! applied to incoming candidates before insertion. Validation belongs
//! to the request layer; the store itself trusts its callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for incoming quote candidates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author is required")]
    MissingAuthor,

    #[error("quote is required")]
    MissingText,
}

/// A stored quote
///
/// `id` is assigned by the store on insertion and never reused; all
/// fields are immutable once stored. On the wire the text field travels
/// under the JSON key `quote`, for compatibility with existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u64,
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
}

/// An incoming quote candidate, before the store has assigned an id
///
/// Fields default to empty so that a missing JSON key fails validation
/// rather than deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteDraft {
    #[serde(default)]
    pub author: String,

    #[serde(default, rename = "quote")]
    pub text: String,
}

impl QuoteDraft {
    /// Check that author and text are non-empty after trimming
    /// leading/trailing whitespace.
    ///
    /// No side effects and no id assignment.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.author.trim().is_empty() {
            return Err(ValidationError::MissingAuthor);
        }

        if self.text.trim().is_empty() {
            return Err(ValidationError::MissingText);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let draft = QuoteDraft {
            author: "Confucius".to_string(),
            text: "Life is simple".to_string(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_empty_author_rejected() {
        let draft = QuoteDraft {
            author: "".to_string(),
            text: "something".to_string(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingAuthor));
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let draft = QuoteDraft {
            author: "   \t".to_string(),
            text: "something".to_string(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingAuthor));

        let draft = QuoteDraft {
            author: "someone".to_string(),
            text: " \n ".to_string(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingText));
    }

    #[test]
    fn test_quote_wire_shape() {
        let quote = Quote {
            id: 7,
            author: "Jimmy Carr".to_string(),
            text: "Everyone is jealous".to_string(),
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["author"], "Jimmy Carr");
        assert_eq!(json["quote"], "Everyone is jealous");
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_draft_missing_key_defaults_empty() {
        let draft: QuoteDraft = serde_json::from_str(r#"{"quote": "text only"}"#).unwrap();
        assert_eq!(draft.author, "");
        assert_eq!(draft.validate(), Err(ValidationError::MissingAuthor));
    }
}
