//! Application services for the story context.

pub mod query_handlers;
