//! Data model produced by the signature extractor.
//!
//! Records are plain values. Later stages never mutate a record in place;
//! they rebuild it with the one field they own:
//! - the extractor sets everything except `rendered_name` and `is_async`
//! - [`crate::overload::disambiguate`] owns `rendered_name`
//! - [`crate::shape::classify`] owns `is_async`

use serde::{Deserialize, Serialize};

use crate::shape::TestShape;

/// One formal parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Raw type identifier with generic arguments and array dimensions stripped.
    pub declared_type: Option<String>,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: Option<&str>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.map(ToString::to_string),
        }
    }

    /// `Type name`, or just `name` when no type was declared.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.declared_type {
            Some(ty) => format!("{ty} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Declared access level of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Private,
    #[default]
    Package,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Package => "package",
        };
        write!(f, "{s}")
    }
}

/// One method declared directly on the analysed class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// The literal source identifier.
    pub base_name: String,
    /// Test identifier; unique across the methods selected for rendering.
    pub rendered_name: String,
    pub parameters: Vec<Parameter>,
    /// `None` for a `void` return.
    pub declared_return_type: Option<String>,
    /// Documentation heuristic: the javadoc mentions "throw".
    pub may_throw: bool,
    pub is_async: bool,
    pub visibility: Visibility,
    pub is_static: bool,
}

impl Method {
    #[must_use]
    pub fn new(
        base_name: impl Into<String>,
        parameters: Vec<Parameter>,
        declared_return_type: Option<&str>,
        may_throw: bool,
    ) -> Self {
        let base_name = base_name.into();
        Self {
            rendered_name: base_name.clone(),
            base_name,
            parameters,
            declared_return_type: declared_return_type.map(ToString::to_string),
            may_throw,
            is_async: false,
            visibility: Visibility::default(),
            is_static: false,
        }
    }

    #[must_use]
    pub fn with_visibility(self, visibility: Visibility) -> Self {
        Self { visibility, ..self }
    }

    #[must_use]
    pub fn with_static(self, is_static: bool) -> Self {
        Self { is_static, ..self }
    }

    /// Assertion shape the renderer emits for this method.
    #[must_use]
    pub fn shape(&self) -> TestShape {
        TestShape::of(self)
    }

    /// Human-readable signature used by method listings:
    /// `add(int a, int b) -> int`.
    #[must_use]
    pub fn display_signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(Parameter::display)
            .collect::<Vec<_>>()
            .join(", ");
        let ret = self.declared_return_type.as_deref().unwrap_or("void");
        format!("{}({params}) -> {ret}", self.base_name)
    }
}

/// The parse result for one source file, before any method filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassUnit {
    pub class_name: String,
    /// Package declared by the source file, if any.
    pub package: Option<String>,
    pub methods: Vec<Method>,
}
