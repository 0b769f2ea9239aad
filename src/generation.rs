//! Draft generation collaborator
//!
//! Generation itself (PDF upload, transport to the backend) lives outside this
//! crate. The review editor only needs the result: the draft HTML and the
//! names of the tokens the backend could not fill in.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::tokens::discover_tokens;

/// Successful generation response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// The generated draft
    pub html: String,
    /// Tokens the backend could not fill in (absent or null means none)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unresolved_tokens: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenerationResult {
    pub fn new(html: impl Into<String>, unresolved_tokens: Vec<String>) -> Self {
        Self {
            html: html.into(),
            unresolved_tokens,
        }
    }

    /// Parse a JSON generation response
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Upload form options sent along with the source document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Seller party is already fully qualified in the source
    pub transmitente_supraqualificada: bool,
    /// Buyer party is already fully qualified in the source
    pub adquirente_supraqualificada: bool,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid generation response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot generate a draft from {0} without the generation backend")]
    Unsupported(PathBuf),
}

/// Produces a draft from a source document
pub trait DocumentGenerator: Send + Sync + 'static {
    fn generate(
        &self,
        source: &Path,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, GenerationError>;
}

/// Generator backed by local files
///
/// - `.json`: a saved generation response
/// - `.html` / `.htm`: a bare draft; its tokens are discovered from the markers
///   it contains
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalGenerator;

impl DocumentGenerator for LocalGenerator {
    fn generate(
        &self,
        source: &Path,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, GenerationError> {
        tracing::debug!(
            target: "generation",
            source = %source.display(),
            transmitente = options.transmitente_supraqualificada,
            adquirente = options.adquirente_supraqualificada,
            "loading local draft"
        );

        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|e| GenerationError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        };

        match extension.as_deref() {
            Some("json") => Ok(GenerationResult::from_json(&read(source)?)?),
            Some("html") | Some("htm") => {
                let html = read(source)?;
                let tokens = discover_tokens(&html);
                Ok(GenerationResult::new(html, tokens))
            }
            _ => Err(GenerationError::Unsupported(source.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let json = r#"{"html": "<p>x</p>", "unresolvedTokens": ["A", "B"]}"#;
        let result = GenerationResult::from_json(json).unwrap();
        assert_eq!(result.html, "<p>x</p>");
        assert_eq!(result.unresolved_tokens, vec!["A", "B"]);
    }

    #[test]
    fn test_absent_or_null_tokens() {
        let absent = GenerationResult::from_json(r#"{"html": "x"}"#).unwrap();
        assert!(absent.unresolved_tokens.is_empty());

        let null = GenerationResult::from_json(r#"{"html": "x", "unresolvedTokens": null}"#).unwrap();
        assert!(null.unresolved_tokens.is_empty());
    }

    #[test]
    fn test_local_generator_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resposta.json");
        std::fs::write(
            &path,
            r#"{"html": "[[A NÃO ENCONTRADO]]", "unresolvedTokens": ["A"]}"#,
        )
        .unwrap();

        let result = LocalGenerator
            .generate(&path, &GenerationOptions::default())
            .unwrap();
        assert_eq!(result.unresolved_tokens, vec!["A"]);
    }

    #[test]
    fn test_local_generator_discovers_html_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minuta.html");
        std::fs::write(&path, "<p>[[CPF NÃO ENCONTRADO]]</p>").unwrap();

        let result = LocalGenerator
            .generate(&path, &GenerationOptions::default())
            .unwrap();
        assert_eq!(result.unresolved_tokens, vec!["CPF"]);
    }

    #[test]
    fn test_local_generator_rejects_pdf() {
        let err = LocalGenerator
            .generate(Path::new("ato.pdf"), &GenerationOptions::default())
            .unwrap_err();
        assert!(matches!(err, GenerationError::Unsupported(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LocalGenerator
            .generate(Path::new("/nonexistent/x.json"), &GenerationOptions::default())
            .unwrap_err();
        assert!(matches!(err, GenerationError::Io { .. }));
    }
}
