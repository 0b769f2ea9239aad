//! Minuta - token-aware review editor for generated deed drafts
//!
//! This crate provides the core types and logic for reviewing a generated
//! HTML draft, locating the fields the generator could not fill in and
//! editing them in place, following the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod generation;
pub mod messages;
pub mod model;
pub mod tokens;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ReviewConfig;
pub use generation::{DocumentGenerator, GenerationOptions, GenerationResult, LocalGenerator};
pub use messages::Msg;
pub use model::AppModel;
