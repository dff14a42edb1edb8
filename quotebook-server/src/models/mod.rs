//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod name;
pub mod entity;
pub mod envelope;

pub use validation::ValidationError;
pub use name::{EntityName, QuoteMessage};
pub use entity::{Author, Category, EntityRef, NewQuote, Quote};
pub use envelope::{Envelope, HEALTHY_MESSAGE};
