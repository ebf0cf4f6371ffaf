//! Story views and media path rules.

pub mod media;
pub mod views;
