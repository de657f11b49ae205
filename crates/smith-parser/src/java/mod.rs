//! Java signature extractor.

use ast_grep_core::Node;
use smith_core::{ClassUnit, Method, ParseError};

use crate::parser::{check_syntax, parse_java};

mod helpers;

/// Doc-comment marker for methods that may throw; matched case-insensitively.
const THROW_MARKER: &str = "throw";

/// Extract the first top-level class of a Java source file.
///
/// Only methods declared directly in the class body are collected;
/// constructors, nested types and their members are ignored.
///
/// # Errors
/// `ParseError::Syntax` if the source is not valid Java,
/// `ParseError::NoClass` if it declares no top-level class.
pub fn extract(source: &str) -> Result<ClassUnit, ParseError> {
    let tree = parse_java(source);
    check_syntax(&tree)?;
    let root = tree.root();

    let package = root
        .children()
        .find(|node| node.kind().as_ref() == "package_declaration")
        .and_then(|node| helpers::package_name(&node));

    let class = root
        .children()
        .find(|node| node.kind().as_ref() == "class_declaration")
        .ok_or(ParseError::NoClass)?;
    let class_name = class
        .field("name")
        .map(|name| name.text().to_string())
        .ok_or(ParseError::NoClass)?;

    let methods: Vec<Method> = class
        .field("body")
        .map(|body| {
            body.children()
                .filter(|member| member.kind().as_ref() == "method_declaration")
                .filter_map(|member| process_method(&member))
                .collect()
        })
        .unwrap_or_default();

    tracing::debug!(class = %class_name, methods = methods.len(), "extracted class");

    Ok(ClassUnit {
        class_name,
        package,
        methods,
    })
}

fn process_method<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Method> {
    let name = node.field("name")?.text().to_string();
    let modifiers = helpers::MemberModifiers::of(node);
    let may_throw = helpers::doc_comment_before(node)
        .is_some_and(|doc| doc.to_lowercase().contains(THROW_MARKER));

    let return_type = node
        .field("type")
        .filter(|ty| ty.kind().as_ref() != "void_type")
        .map(|ty| helpers::raw_type_name(&ty.text()));

    let method = Method::new(
        name,
        helpers::extract_parameters(node),
        return_type.as_deref(),
        may_throw,
    )
    .with_visibility(modifiers.visibility)
    .with_static(modifiers.is_static);

    tracing::debug!(signature = %method.display_signature(), may_throw, "extracted method");
    Some(method)
}

#[cfg(test)]
mod tests;
