//! Declared type -> literal placeholder expression.
//!
//! Generated calls must compile without manual editing for primitives and
//! the common containers. Anything else degrades to `null`.

/// Raw container type names that resolve to an empty `ArrayList`.
pub const LIST_TYPES: &[&str] = &["list", "arraylist", "collection"];

/// Raw container type names that resolve to an empty `HashMap`.
pub const MAP_TYPES: &[&str] = &["map", "hashmap"];

const INTEGRAL_TYPES: &[&str] = &["byte", "short", "int", "char"];
const FLOATING_TYPES: &[&str] = &["float", "double"];

pub const NULL_LITERAL: &str = "null";
pub const STRING_LITERAL: &str = "\"test\"";
pub const EMPTY_LIST: &str = "new ArrayList<>()";
pub const EMPTY_MAP: &str = "new HashMap<>()";

/// Map a declared type to the literal used as a call argument.
///
/// Matching is case-insensitive and the first rule that applies wins:
/// integral primitives, `long`, floating primitives, any `bool*`, anything
/// containing `string`, list-like containers, map-like containers, then
/// `null` for everything else (including an absent type).
#[must_use]
pub fn resolve(declared_type: Option<&str>) -> &'static str {
    let Some(declared) = declared_type else {
        return NULL_LITERAL;
    };
    let ty = declared.to_lowercase();
    let ty = ty.as_str();

    if INTEGRAL_TYPES.contains(&ty) {
        "0"
    } else if ty == "long" {
        "0L"
    } else if FLOATING_TYPES.contains(&ty) {
        "0.0"
    } else if ty.starts_with("bool") {
        "false"
    } else if ty.contains("string") {
        STRING_LITERAL
    } else if is_list_type(ty) {
        EMPTY_LIST
    } else if is_map_type(ty) {
        EMPTY_MAP
    } else {
        NULL_LITERAL
    }
}

/// Exact, case-insensitive match against [`LIST_TYPES`].
#[must_use]
pub fn is_list_type(declared: &str) -> bool {
    LIST_TYPES.iter().any(|t| declared.eq_ignore_ascii_case(t))
}

/// Exact, case-insensitive match against [`MAP_TYPES`].
#[must_use]
pub fn is_map_type(declared: &str) -> bool {
    MAP_TYPES.iter().any(|t| declared.eq_ignore_ascii_case(t))
}

/// Comma-joined placeholders for `types`, in order.
pub fn argument_list<'a>(types: impl IntoIterator<Item = Option<&'a str>>) -> String {
    types.into_iter().map(resolve).collect::<Vec<_>>().join(", ")
}
