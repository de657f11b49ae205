//! # smith-render
//!
//! Binds the analysed class into a minijinja template and evaluates it.
//!
//! The built-in template produces one JUnit 5 test per method, choosing the
//! body from the method's [`smith_core::TestShape`]. Callers may substitute
//! their own template; it sees the same [`context::TestFileContext`].
//!
//! ```
//! use smith_core::{ImportFlags, Method};
//! use smith_render::{TemplateSource, render};
//!
//! let methods = vec![Method::new("size", Vec::new(), Some("int"), false)];
//! let text = render("Bag", None, &methods, ImportFlags::default(), &TemplateSource::Builtin)
//!     .expect("built-in template renders");
//! assert!(text.contains("public class BagTest"));
//! ```

pub mod context;

use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use smith_core::{ImportFlags, Method, TemplateError};

pub use context::{MethodContext, TestFileContext};

/// The built-in JUnit 5 template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/junit5.java.j2");
const DEFAULT_TEMPLATE_NAME: &str = "junit5.java.j2";

/// Where the template text comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    #[default]
    Builtin,
    /// External template; `name` only labels error locations.
    Custom { name: String, text: String },
}

impl TemplateSource {
    #[must_use]
    pub fn custom(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Custom {
            name: name.into(),
            text: text.into(),
        }
    }

    fn parts(&self) -> (&str, &str) {
        match self {
            Self::Builtin => (DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE),
            Self::Custom { name, text } => (name, text),
        }
    }
}

/// Render the test file for `methods` of `class_name`.
///
/// # Errors
/// Returns `TemplateError` if the template does not compile or references
/// a binding the context does not provide.
pub fn render(
    class_name: &str,
    package: Option<&str>,
    methods: &[Method],
    imports: ImportFlags,
    template: &TemplateSource,
) -> Result<String, TemplateError> {
    let (name, text) = template.parts();
    let env = environment();
    let compiled = env
        .template_from_named_str(name, text)
        .map_err(|e| template_error(&e, name))?;

    let ctx = TestFileContext::new(class_name, package, methods, imports);
    tracing::debug!(template = name, methods = ctx.methods.len(), "rendering test file");
    compiled.render(&ctx).map_err(|e| template_error(&e, name))
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env
}

fn template_error(err: &minijinja::Error, fallback_name: &str) -> TemplateError {
    let name = err.name().unwrap_or(fallback_name);
    let location = err
        .line()
        .map_or_else(|| name.to_string(), |line| format!("{name}:{line}"));
    let message = err
        .detail()
        .map_or_else(|| err.kind().to_string(), ToString::to_string);

    match err.kind() {
        ErrorKind::SyntaxError => TemplateError::Syntax { location, message },
        ErrorKind::UndefinedError
        | ErrorKind::UnknownFilter
        | ErrorKind::UnknownTest
        | ErrorKind::UnknownFunction => TemplateError::Undefined { location, message },
        _ => TemplateError::Render { location, message },
    }
}
