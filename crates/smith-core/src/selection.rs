//! Method subset chosen by the caller.

use std::collections::BTreeSet;

use crate::model::{Method, Visibility};

/// Which methods to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    /// Base names (every overload) or rendered names (one overload).
    Names(BTreeSet<String>),
}

impl Selection {
    /// Build a selection from user-supplied names; an empty list means all.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: BTreeSet<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            Self::All
        } else {
            Self::Names(names)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub selection: Selection,
    /// Drop `private` methods from an `All` selection.
    pub skip_private: bool,
}

/// Non-fatal conditions found while selecting methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// Nothing matched; an empty test class is still produced.
    SelectionEmpty,
    /// A requested name matched no method.
    UnknownMethod(String),
}

impl std::fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelectionEmpty => write!(f, "selection matched no methods; rendering an empty test class"),
            Self::UnknownMethod(name) => write!(f, "no method named '{name}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub methods: Vec<Method>,
    pub warnings: Vec<GenerationWarning>,
}

/// Filter `methods` by `request`, preserving declaration order.
#[must_use]
pub fn select(methods: Vec<Method>, request: &GenerationRequest) -> SelectionOutcome {
    let mut warnings = Vec::new();

    let selected: Vec<Method> = match &request.selection {
        Selection::All => methods
            .into_iter()
            .filter(|m| !(request.skip_private && m.visibility == Visibility::Private))
            .collect(),
        Selection::Names(names) => {
            for name in names {
                let known = methods
                    .iter()
                    .any(|m| &m.base_name == name || &m.rendered_name == name);
                if !known {
                    warnings.push(GenerationWarning::UnknownMethod(name.clone()));
                }
            }
            methods
                .into_iter()
                .filter(|m| names.contains(&m.base_name) || names.contains(&m.rendered_name))
                .collect()
        }
    };

    if selected.is_empty() {
        warnings.push(GenerationWarning::SelectionEmpty);
    }
    for warning in &warnings {
        tracing::warn!(%warning, "method selection");
    }

    SelectionOutcome {
        methods: selected,
        warnings,
    }
}
