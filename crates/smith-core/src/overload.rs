//! Unique test identifiers across overloaded methods.

use std::collections::{HashMap, HashSet};

use crate::model::{Method, Parameter};

/// Suffix token for a parameter with no declared type.
const UNTYPED_TOKEN: &str = "Obj";
/// Suffix used when an overload takes no parameters.
const NO_PARAMS_TOKEN: &str = "void";

/// Assign every method a `rendered_name` that is unique within `methods`.
///
/// A base name declared once keeps its name. Every member of an overload
/// group (including the first) becomes `<base>_<suffix>`, see
/// [`overload_suffix`]. If an overload collides after normalization with
/// another overload or with a non-overloaded method's name, it receives
/// `_2`, `_3`, ... in declaration order; non-overloaded methods are never
/// renamed. Names derive only from base names and parameter types, so
/// running this twice is a no-op.
#[must_use]
pub fn disambiguate(methods: Vec<Method>) -> Vec<Method> {
    let mut group_sizes: HashMap<String, usize> = HashMap::new();
    for method in &methods {
        *group_sizes.entry(method.base_name.clone()).or_default() += 1;
    }

    // Singletons keep their base name, so overloads must route around them.
    let mut taken: HashSet<String> = group_sizes
        .iter()
        .filter(|(_, size)| **size == 1)
        .map(|(name, _)| name.clone())
        .collect();

    methods
        .into_iter()
        .map(|method| {
            let rendered_name = if group_sizes[&method.base_name] > 1 {
                let candidate = format!(
                    "{}_{}",
                    method.base_name,
                    overload_suffix(&method.parameters)
                );
                claim_unique(candidate, &mut taken)
            } else {
                method.base_name.clone()
            };
            tracing::debug!(
                base = %method.base_name,
                rendered = %rendered_name,
                "assigned test name"
            );
            Method {
                rendered_name,
                ..method
            }
        })
        .collect()
}

/// Parameter types joined with `_`, `Obj` for untyped parameters, `void`
/// for none; every character that is not alphanumeric or `_` becomes `_`.
#[must_use]
pub fn overload_suffix(parameters: &[Parameter]) -> String {
    if parameters.is_empty() {
        return NO_PARAMS_TOKEN.to_string();
    }

    parameters
        .iter()
        .map(|p| p.declared_type.as_deref().unwrap_or(UNTYPED_TOKEN))
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn claim_unique(candidate: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(candidate.clone()) {
        return candidate;
    }
    let mut n = 2usize;
    loop {
        let name = format!("{candidate}_{n}");
        if taken.insert(name.clone()) {
            return name;
        }
        n += 1;
    }
}
