//! Stored entities and the quote write model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{QuoteMessage, ValidationError};

/// A bucket that groups quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// The person a quote is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A stored quote. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub category_id: i64,
    pub author_id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Reference to a category or author inside a quote request.
///
/// Accepts a bare id (`3`) or any object carrying one (`{"id": 3, "name": ...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(i64),
    Object { id: i64 },
}

impl EntityRef {
    pub fn id(self) -> i64 {
        match self {
            Self::Id(id) | Self::Object { id } => id,
        }
    }
}

/// Validated quote ready for insert.
///
/// Ids are only checked for sign; whether the category or author exists is
/// not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub category_id: i64,
    pub author_id: i64,
    pub message: QuoteMessage,
}

impl NewQuote {
    pub fn new(
        category: EntityRef,
        author: EntityRef,
        message: &str,
    ) -> Result<Self, ValidationError> {
        let category_id = positive("category", category.id())?;
        let author_id = positive("author", author.id())?;
        let message = QuoteMessage::new(message)?;

        Ok(Self {
            category_id,
            author_id,
            message,
        })
    }
}

fn positive(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidId { field, value })
    }
}
