//! `notekeeper` - A minimal in-memory note-taking HTTP API
//!
//! This library provides the note model, the in-memory note store and the
//! axum router that exposes create, read, update, delete and search over HTTP.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod note;
pub mod server;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use note::{Note, NoteInput, NoteView};
pub use store::NoteStore;
