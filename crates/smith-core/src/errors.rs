//! Error taxonomy shared by the testsmith crates.
//!
//! Every failure is fatal and reported to the immediate caller; nothing is
//! retried because every stage is deterministic. Non-fatal conditions
//! (an empty selection, unknown method names) are modelled as
//! [`crate::GenerationWarning`] instead.

use thiserror::Error;

/// The source text could not be turned into a class unit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The source does not conform to the Java grammar.
    #[error("Syntax error at line {line}: {snippet}")]
    Syntax { line: usize, snippet: String },

    /// The source parsed but declares no top-level class.
    #[error("No top-level class declaration found")]
    NoClass,
}

/// A template failed to compile or evaluate.
///
/// `location` is `<template name>:<line>` when minijinja reports a line,
/// otherwise just the template name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template syntax error ({location}): {message}")]
    Syntax { location: String, message: String },

    /// An undefined variable, filter, test or function was referenced.
    #[error("Template references an undefined binding ({location}): {message}")]
    Undefined { location: String, message: String },

    #[error("Template evaluation failed ({location}): {message}")]
    Render { location: String, message: String },
}

/// Errors returned by the end-to-end generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_mentions_line_and_snippet() {
        let err = ParseError::Syntax {
            line: 3,
            snippet: "int add(int a".to_string(),
        };
        assert_eq!(err.to_string(), "Syntax error at line 3: int add(int a");
    }

    #[test]
    fn generate_error_is_transparent_over_parse_error() {
        let err = GenerateError::from(ParseError::NoClass);
        assert_eq!(err.to_string(), "No top-level class declaration found");
    }

    #[test]
    fn template_error_carries_location() {
        let err = GenerateError::from(TemplateError::Undefined {
            location: "custom.j2:4".to_string(),
            message: "undefined value".to_string(),
        });
        assert!(err.to_string().contains("custom.j2:4"));
    }
}
