//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one statement per
//! call. No transactions, no retries.

pub mod categories;
pub mod authors;
pub mod quotes;

pub use categories::CategoryRepo;
pub use authors::AuthorRepo;
pub use quotes::QuoteRepo;
