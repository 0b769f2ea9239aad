//! Document model - the generated draft under review and its unresolved tokens

use super::surface::Surface;
use crate::generation::GenerationResult;
use crate::tokens::is_valid_token_name;

/// A field the generation backend could not fill in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedToken {
    pub name: String,
    pub resolved: bool,
}

impl UnresolvedToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolved: false,
        }
    }
}

/// The unresolved tokens of one document, in backend order
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    tokens: Vec<UnresolvedToken>,
}

impl TokenSet {
    /// Build from backend token names
    ///
    /// Names are unique within a document: repeats are dropped, as are names
    /// that cannot appear inside a marker.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<UnresolvedToken> = Vec::new();
        for name in names {
            let name = name.into();
            if !is_valid_token_name(&name) {
                tracing::warn!(target: "tokens", token = %name, "ignoring invalid token name");
                continue;
            }
            if tokens.iter().any(|t| t.name == name) {
                continue;
            }
            tokens.push(UnresolvedToken::new(name));
        }
        Self { tokens }
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnresolvedToken> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&UnresolvedToken> {
        self.tokens.iter().find(|t| t.name == name)
    }

    /// Names still awaiting resolution, in backend order
    pub fn outstanding(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| !t.resolved)
            .map(|t| t.name.as_str())
    }

    pub fn outstanding_names(&self) -> Vec<String> {
        self.outstanding().map(str::to_string).collect()
    }

    pub fn outstanding_count(&self) -> usize {
        self.outstanding().count()
    }

    pub fn is_outstanding(&self, name: &str) -> bool {
        self.get(name).is_some_and(|t| !t.resolved)
    }

    /// Mark `name` resolved
    ///
    /// Returns true only for the transition itself; resolving an already
    /// resolved or unknown token changes nothing.
    pub fn resolve(&mut self, name: &str) -> bool {
        match self.tokens.iter_mut().find(|t| t.name == name) {
            Some(token) if !token.resolved => {
                token.resolved = true;
                true
            }
            _ => false,
        }
    }
}

/// The working unit of a review session
#[derive(Debug, Clone)]
pub struct Document {
    /// Draft as received from generation, never modified
    original_html: String,
    /// Canonical current content; None until the first flush from the surface
    edited_content: Option<String>,
    tokens: TokenSet,
    /// Rendered, editable view of the draft
    surface: Surface,
}

impl Document {
    /// Create a document from a draft and its unresolved token names
    pub fn new<S: AsRef<str>>(html: impl Into<String>, token_names: &[S]) -> Self {
        let original_html = html.into();
        let tokens = TokenSet::from_names(token_names.iter().map(|n| n.as_ref().to_string()));
        let names = tokens.outstanding_names();
        let surface = Surface::build(&original_html, &names);

        tracing::info!(
            target: "document",
            tokens = tokens.len(),
            markers = surface.markers().len(),
            "document loaded"
        );

        Self {
            original_html,
            edited_content: None,
            tokens,
            surface,
        }
    }

    /// Create a document from a successful generation
    pub fn from_generation(result: GenerationResult) -> Self {
        Self::new(result.html, &result.unresolved_tokens)
    }

    pub fn original_html(&self) -> &str {
        &self.original_html
    }

    /// Canonical content, empty until the surface has been flushed
    pub fn edited_content(&self) -> &str {
        self.edited_content.as_deref().unwrap_or("")
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut TokenSet {
        &mut self.tokens
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Whether the canonical content differs from the original draft
    pub fn is_dirty(&self) -> bool {
        self.edited_content
            .as_deref()
            .is_some_and(|edited| edited != self.original_html)
    }

    /// Content for copy/export: the edited content, else the original draft
    pub fn export_content(&self) -> &str {
        match self.edited_content.as_deref() {
            Some(edited) if !edited.is_empty() => edited,
            _ => &self.original_html,
        }
    }

    /// Capture the surface into the canonical content
    /// Returns true if the content changed
    pub fn sync_from_surface(&mut self) -> bool {
        let content = self.surface.serialize();
        if self.edited_content.as_deref() == Some(content.as_str()) {
            return false;
        }
        self.edited_content = Some(content);
        true
    }

    /// Check internal consistency (debug builds only)
    pub fn assert_invariants(&self) {
        self.surface.assert_invariants();
        #[cfg(debug_assertions)]
        for marker in self.surface.markers() {
            assert!(
                self.tokens.get(&marker.name).is_some(),
                "marker {:?} has no token",
                marker.name
            );
        }
    }
}
