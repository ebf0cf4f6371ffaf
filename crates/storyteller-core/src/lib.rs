//! Storyteller Core — shared domain types.
//!
//! This crate defines the story data model, the domain error type, and the
//! repository trait that request handlers depend on. It contains no
//! infrastructure code.

pub mod error;
pub mod repository;
pub mod scene;
