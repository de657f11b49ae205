use pretty_assertions::assert_eq;
use smith_core::{ClassUnit, Method, Parameter, Visibility};

use super::*;


fn parse_and_extract(source: &str) -> ClassUnit {
    extract(source).expect("extraction should succeed")
}

fn find_method<'a>(unit: &'a ClassUnit, name: &str) -> &'a Method {
    unit.methods
        .iter()
        .find(|method| method.base_name == name)
        .unwrap_or_else(|| panic!("should find method named '{name}'"))
}

fn param_types(method: &Method) -> Vec<Option<&str>> {
    method
        .parameters
        .iter()
        .map(|p| p.declared_type.as_deref())
        .collect()
}

fn fixture_unit() -> ClassUnit {
    let source = include_str!("../../../tests/fixtures/Inventory.java");
    parse_and_extract(source)
}
