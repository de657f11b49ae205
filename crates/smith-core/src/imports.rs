//! Imports the generated test file needs beyond the JUnit basics.

use serde::{Deserialize, Serialize};

use crate::model::Method;
use crate::placeholder::{is_list_type, is_map_type};
use crate::shape::TestShape;

/// Derived per render; never set by hand.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFlags {
    /// Some parameter is declared `List`, `ArrayList` or `Collection`.
    pub needs_list_import: bool,
    /// Some parameter is declared `Map` or `HashMap`.
    pub needs_map_import: bool,
    /// Some test body waits on a `CompletableFuture`.
    pub needs_future_import: bool,
    /// Some test body captures an `OptionalDouble`.
    pub needs_optional_import: bool,
}

/// Scan `methods` for the imports their test bodies require.
#[must_use]
pub fn aggregate(methods: &[Method]) -> ImportFlags {
    let declared_types = || {
        methods
            .iter()
            .flat_map(|m| &m.parameters)
            .filter_map(|p| p.declared_type.as_deref())
    };

    ImportFlags {
        needs_list_import: declared_types().any(is_list_type),
        needs_map_import: declared_types().any(is_map_type),
        needs_future_import: methods.iter().any(|m| m.shape() == TestShape::Async),
        needs_optional_import: methods.iter().any(|m| m.shape() == TestShape::Optional),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Parameter;
    use crate::shape::classify;

    fn method(types: &[&str]) -> Method {
        let params = types
            .iter()
            .map(|ty| Parameter::new("p", Some(ty)))
            .collect();
        classify(Method::new("m", params, None, false))
    }

    #[test]
    fn list_parameter_needs_list_import() {
        let flags = aggregate(&[method(&["List"])]);
        assert!(flags.needs_list_import);
        assert!(!flags.needs_map_import);
    }

    #[test]
    fn primitive_parameters_need_nothing() {
        let flags = aggregate(&[method(&["int", "double"]), method(&["boolean"])]);
        assert_eq!(flags, ImportFlags::default());
    }

    #[test]
    fn container_matching_is_case_insensitive_and_exact() {
        assert!(aggregate(&[method(&["hashmap"])]).needs_map_import);
        assert!(aggregate(&[method(&["COLLECTION"])]).needs_list_import);
        assert!(!aggregate(&[method(&["LinkedList"])]).needs_list_import);
    }

    #[test]
    fn any_method_can_raise_a_flag() {
        let flags = aggregate(&[method(&["int"]), method(&["Map", "String"])]);
        assert!(flags.needs_map_import);
    }

    #[test]
    fn async_and_optional_shapes_raise_their_flags() {
        let optional = classify(Method::new("avg", Vec::new(), Some("OptionalDouble"), false));
        let flags = aggregate(&[method(&["Callback"]), optional]);
        assert!(flags.needs_future_import);
        assert!(flags.needs_optional_import);
    }

    #[test]
    fn throwing_async_method_does_not_need_future_import() {
        let method = classify(Method::new(
            "save",
            vec![Parameter::new("cb", Some("Callback"))],
            None,
            true,
        ));
        assert!(!aggregate(&[method]).needs_future_import);
    }

    #[test]
    fn empty_method_set_needs_nothing() {
        assert_eq!(aggregate(&[]), ImportFlags::default());
    }
}
