//! Storyteller — scene queries.
//!
//! Turns stored scenes into the views the game client consumes and maps
//! media file names onto the client's asset layout.

pub mod application;
pub mod domain;
