//! Unresolved-token markers
//!
//! The generation backend leaves a literal marker wherever it could not fill
//! in a field: `[[<name> NÃO ENCONTRADO]]`. This module locates those markers
//! in generated HTML and wraps them for display.
//!
//! - `matcher` - pure marker location (`find_markers`)
//! - `highlight` - wrapper markup (`apply_highlights`, `strip_highlights`)

pub mod highlight;
pub mod matcher;

pub use highlight::{apply_highlights, highlight, strip_highlights, WRAPPER_CLASS};
pub use matcher::{discover_tokens, find_markers, is_valid_token_name, marker_text, MarkerMatch};

/// Opening delimiter of a marker
pub const MARKER_OPEN: &str = "[[";
/// Text between the token name and the closing delimiter
pub const MARKER_SUFFIX: &str = " NÃO ENCONTRADO";
/// Closing delimiter of a marker
pub const MARKER_CLOSE: &str = "]]";
