//! Runtime module - terminal integration
//!
//! This module contains the code for running the reviewer:
//! - `app` - the line loop, command execution on worker threads
//! - `input` - input line to message mapping

pub mod app;
pub mod input;

pub use app::App;
