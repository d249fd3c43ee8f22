//! Validation context and identifier rules for manifest parsing.

use std::{collections::HashSet, sync::Arc};

use miette::SourceSpan;
use poolgen_core::component_type_name;

use crate::{Result, error::SourceContext};

/// Validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "poolgen.toml");
/// ctx.validate_name("Position", "component")?;
///
/// let nested = ctx.push("Position");
/// nested.validate_name("x", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Position", "x"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'Position'" or just "component" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    /// Find the span of the first occurrence of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name, 0)
    }

    /// Validate that a name is a valid identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_reserved_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate every name and reject duplicates.
    pub fn validate_unique_names<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        kind: &str,
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for name in names {
            self.validate_name(name, kind)?;
            if !seen.insert(name) {
                let span = find_name_span(self.source.src(), name, 1);
                return Err(self.source.duplicate_error(name, kind, span));
            }
        }
        Ok(())
    }

    /// Validate that no two component names share a type name.
    ///
    /// `Position` and `PositionComponent` both generate `PositionComponent`,
    /// so the second declaration is reported.
    pub fn validate_unique_type_names<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for name in names {
            let type_name = component_type_name(name);
            if seen.contains(&type_name) {
                return Err(self.source.duplicate_error(
                    type_name,
                    "component type",
                    self.find_span(name),
                ));
            }
            seen.insert(type_name);
        }
        Ok(())
    }
}

/// Keywords of the default target language (C#) that cannot be identifiers.
pub(crate) const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a reserved keyword
pub(crate) fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// Find the span of a quoted name in the TOML source, skipping the first
/// `skip` occurrences.
///
/// Names appear either as `name = "value"` or as an array element `"value"`.
pub(crate) fn find_name_span(src: &str, name: &str, skip: usize) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some((pos, _)) = src.match_indices(&pattern).nth(skip) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is a valid identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
