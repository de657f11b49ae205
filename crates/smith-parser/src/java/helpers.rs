use ast_grep_core::Node;
use smith_core::{Parameter, Visibility};

/// Body of the `/** ... */` comment directly above `node`.
///
/// Line comments in between are skipped; any other sibling, or a plain
/// `/* */` or `/*** */` block, means the member is undocumented.
pub(super) fn doc_comment_before<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let mut sibling = node.prev();
    while let Some(prev) = sibling {
        match prev.kind().as_ref() {
            "line_comment" => sibling = prev.prev(),
            "block_comment" => {
                let text = prev.text();
                let body = text.trim().strip_prefix("/**")?.strip_suffix("*/")?;
                return (!body.starts_with('*')).then(|| body.trim().to_string());
            }
            _ => return None,
        }
    }
    None
}

/// Access level and `static`, the two modifiers the generator acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct MemberModifiers {
    pub visibility: Visibility,
    pub is_static: bool,
}

impl MemberModifiers {
    /// Read from the `modifiers` child of a member declaration.
    pub(super) fn of<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        node.children()
            .find(|child| child.kind().as_ref() == "modifiers")
            .map_or_else(|| Self::parse(""), |modifiers| Self::parse(&modifiers.text()))
    }

    /// Keywords are whole whitespace-separated tokens, so annotation
    /// arguments such as `@Tag("static")` never match.
    fn parse(text: &str) -> Self {
        let has = |keyword: &str| text.split_whitespace().any(|token| token == keyword);
        let visibility = if has("public") {
            Visibility::Public
        } else if has("protected") {
            Visibility::Protected
        } else if has("private") {
            Visibility::Private
        } else {
            Visibility::Package
        };
        Self {
            visibility,
            is_static: has("static"),
        }
    }
}

/// `package a.b.c;` -> `a.b.c`.
pub(super) fn package_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let name = node
        .children()
        .find(|child| {
            let kind = child.kind();
            kind.as_ref() == "scoped_identifier" || kind.as_ref() == "identifier"
        })?
        .text()
        .split_whitespace()
        .collect::<String>();
    (!name.is_empty()).then_some(name)
}

/// Raw type identifier: generic arguments and array dimensions dropped,
/// whitespace removed. `List<String>` reads as `List`, `int[]` as `int`.
pub(super) fn raw_type_name(type_text: &str) -> String {
    let mut depth = 0usize;
    type_text
        .chars()
        .filter(|c| match c {
            '<' => {
                depth += 1;
                false
            }
            '>' => {
                depth = depth.saturating_sub(1);
                false
            }
            '[' | ']' => false,
            c => depth == 0 && !c.is_whitespace(),
        })
        .collect()
}

/// Formal parameters in declaration order. Receiver parameters
/// (`Foo this`) are not call arguments and are skipped.
pub(super) fn extract_parameters<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Parameter> {
    let Some(parameters) = node.field("parameters") else {
        return Vec::new();
    };

    parameters
        .children()
        .filter_map(|child| match child.kind().as_ref() {
            "formal_parameter" => formal_parameter(&child),
            "spread_parameter" => spread_parameter(&child),
            _ => None,
        })
        .collect()
}

fn formal_parameter<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Parameter> {
    let name = node.field("name")?.text().to_string();
    let declared_type = node.field("type").map(|t| raw_type_name(&t.text()));
    Some(Parameter {
        name,
        declared_type,
    })
}

/// `String... args`: the grammar exposes no `type`/`name` fields here.
fn spread_parameter<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Parameter> {
    let declared_type = node
        .children()
        .find(|child| is_type_kind(child.kind().as_ref()))
        .map(|t| raw_type_name(&t.text()));

    let name = node.children().find_map(|child| match child.kind().as_ref() {
        "variable_declarator" => child.field("name").map(|n| n.text().to_string()),
        "identifier" => Some(child.text().to_string()),
        _ => None,
    })?;

    Some(Parameter {
        name,
        declared_type,
    })
}

fn is_type_kind(kind: &str) -> bool {
    kind.ends_with("_type") || kind == "type_identifier" || kind == "scoped_type_identifier"
}
