//! Typed template context.
//!
//! Templates see exactly these fields; minijinja runs in strict mode, so a
//! template that names anything else fails with an undefined-binding error.

use serde::Serialize;
use smith_core::placeholder::{argument_list, resolve};
use smith_core::{ImportFlags, Method, TestShape};

/// Continuation appended after every declared parameter of an async call.
pub const CALLBACK_CONTINUATION: &str = "result -> future.complete(result)";

/// Receiver name for instance-method calls in the default template.
pub const INSTANCE_RECEIVER: &str = "obj";

#[derive(Debug, Clone, Serialize)]
pub struct TestFileContext<'a> {
    pub class_name: &'a str,
    pub package: Option<&'a str>,
    pub imports: ImportFlags,
    pub methods: Vec<MethodContext<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterContext<'a> {
    pub name: &'a str,
    pub declared_type: Option<&'a str>,
    pub placeholder: &'static str,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize)]
pub struct MethodContext<'a> {
    pub base_name: &'a str,
    pub rendered_name: &'a str,
    /// Placeholders for every declared parameter, comma-joined.
    pub args: String,
    /// `args` followed by the continuation.
    pub async_args: String,
    /// `obj`, or the class name for static methods.
    pub target: &'a str,
    pub return_type: Option<&'a str>,
    pub shape: TestShape,
    pub may_throw: bool,
    pub is_async: bool,
    pub is_static: bool,
    pub parameters: Vec<ParameterContext<'a>>,
}

impl<'a> TestFileContext<'a> {
    #[must_use]
    pub fn new(
        class_name: &'a str,
        package: Option<&'a str>,
        methods: &'a [Method],
        imports: ImportFlags,
    ) -> Self {
        Self {
            class_name,
            package,
            imports,
            methods: methods
                .iter()
                .map(|m| MethodContext::new(m, class_name))
                .collect(),
        }
    }
}

impl<'a> MethodContext<'a> {
    #[must_use]
    pub fn new(method: &'a Method, class_name: &'a str) -> Self {
        let types = || method.parameters.iter().map(|p| p.declared_type.as_deref());

        let args = argument_list(types());
        let async_args = if args.is_empty() {
            CALLBACK_CONTINUATION.to_string()
        } else {
            format!("{args}, {CALLBACK_CONTINUATION}")
        };

        Self {
            base_name: &method.base_name,
            rendered_name: &method.rendered_name,
            args,
            async_args,
            target: if method.is_static {
                class_name
            } else {
                INSTANCE_RECEIVER
            },
            return_type: method.declared_return_type.as_deref(),
            shape: method.shape(),
            may_throw: method.may_throw,
            is_async: method.is_async,
            is_static: method.is_static,
            parameters: method
                .parameters
                .iter()
                .map(|p| ParameterContext {
                    name: &p.name,
                    declared_type: p.declared_type.as_deref(),
                    placeholder: resolve(p.declared_type.as_deref()),
                })
                .collect(),
        }
    }
}
