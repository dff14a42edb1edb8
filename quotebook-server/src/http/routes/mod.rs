//! Route handlers organized by resource

pub mod health;
pub mod hello;
pub mod categories;
pub mod authors;
pub mod quotes;
