//! Validated names and quote text
//!
//! Input is trimmed before checks; the trimmed value is what gets stored.

use super::ValidationError;

/// Maximum length for category and author names
const MAX_NAME_LEN: usize = 255;

/// Maximum length for a quote message
const MAX_MESSAGE_LEN: usize = 4096;

fn bounded(field: &'static str, s: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_owned())
}

/// Validated category or author name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Create a new name.
    ///
    /// # Rules
    /// - Surrounding whitespace is dropped
    /// - Must not be empty after trimming
    /// - Max 255 characters
    ///
    /// # Example
    /// ```
    /// use quotebook_server::models::EntityName;
    ///
    /// assert_eq!(EntityName::new("  stoic ").unwrap().as_str(), "stoic");
    /// assert!(EntityName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded("name", s, MAX_NAME_LEN).map(Self)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated quote message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteMessage(String);

impl QuoteMessage {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded("message", s, MAX_MESSAGE_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_names() {
        let name = EntityName::new("\tMarcus Aurelius  ").unwrap();
        assert_eq!(name.as_str(), "Marcus Aurelius");
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(
            EntityName::new("").unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
        assert_eq!(
            QuoteMessage::new(" \n ").unwrap_err(),
            ValidationError::Empty { field: "message" }
        );
    }

    #[test]
    fn max_length_counts_chars() {
        // multi-byte characters count once each
        let name_255 = "é".repeat(255);
        assert!(EntityName::new(&name_255).is_ok());

        let name_256 = "a".repeat(256);
        let err = EntityName::new(&name_256).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }

    #[test]
    fn long_messages_allowed_up_to_limit() {
        assert!(QuoteMessage::new(&"x".repeat(4096)).is_ok());
        assert!(QuoteMessage::new(&"x".repeat(4097)).is_err());
    }
}
