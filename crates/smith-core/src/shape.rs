//! Async detection and assertion-shape selection.
//!
//! Both facts come from naming conventions on declared type tokens, not
//! from type analysis: a trailing parameter whose type ends in `callback`
//! marks a callback-style method, and only the literal `OptionalDouble`
//! return type selects the optional shape.

use serde::{Deserialize, Serialize};

use crate::model::{Method, Parameter};

const CALLBACK_SUFFIX: &str = "callback";
const OPTIONAL_RETURN: &str = "OptionalDouble";

/// Assertion pattern emitted for one generated test body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestShape {
    /// Documentation mentions throwing: comment stub only.
    Exception,
    /// Callback-style: wait on a future with a one second bound.
    Async,
    /// `void` return: side-effect TODO.
    Void,
    /// `OptionalDouble` return: presence check.
    Optional,
    /// Equality against a zero placeholder.
    Plain,
}

impl TestShape {
    /// Select the shape for `method`; the first matching rule wins.
    #[must_use]
    pub fn of(method: &Method) -> Self {
        if method.may_throw {
            Self::Exception
        } else if method.is_async {
            Self::Async
        } else {
            match method.declared_return_type.as_deref() {
                None => Self::Void,
                Some(OPTIONAL_RETURN) => Self::Optional,
                Some(_) => Self::Plain,
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exception => "exception",
            Self::Async => "async",
            Self::Void => "void",
            Self::Optional => "optional",
            Self::Plain => "plain",
        }
    }
}

impl std::fmt::Display for TestShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a type token names a callback (`...callback`, any case).
#[must_use]
pub fn is_callback_type(declared: &str) -> bool {
    declared.to_lowercase().ends_with(CALLBACK_SUFFIX)
}

/// Callback-style iff the last parameter's declared type is a callback.
#[must_use]
pub fn detect_async(parameters: &[Parameter]) -> bool {
    parameters
        .last()
        .and_then(|p| p.declared_type.as_deref())
        .is_some_and(is_callback_type)
}

/// Rebuild `method` with `is_async` derived from its parameters.
#[must_use]
pub fn classify(method: Method) -> Method {
    let is_async = detect_async(&method.parameters);
    Method { is_async, ..method }
}
