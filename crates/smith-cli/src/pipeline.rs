//! Generation pipeline: extract → disambiguate → classify → select → aggregate → render.
//!
//! Split in two so `generate` can show the method listing between parsing
//! and rendering:
//! 1. [`inspect`] parses the source and finalises every method of the class
//!    (test names and shapes do not depend on the selection)
//! 2. [`render_unit`] narrows to the requested methods and evaluates the template
//!
//! Every stage takes its input by value and returns new records.

use smith_core::{
    ClassUnit, GenerateError, GenerationRequest, GenerationWarning, ParseError, SelectionOutcome,
    TemplateError, aggregate, classify, disambiguate, select,
};
use smith_render::TemplateSource;

/// A rendered test file plus what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub class_name: String,
    pub package: Option<String>,
    pub text: String,
    /// `test_<rendered_name>` for every generated test, in file order.
    pub tests: Vec<String>,
    pub warnings: Vec<GenerationWarning>,
}

/// Parse `source` and give every method its test name and shape.
///
/// # Errors
/// Returns `ParseError` if the source is malformed or declares no class.
pub fn inspect(source: &str) -> Result<ClassUnit, ParseError> {
    let unit = smith_parser::extract(source)?;
    let methods = disambiguate(unit.methods)
        .into_iter()
        .map(classify)
        .collect();
    Ok(ClassUnit { methods, ..unit })
}

/// Render the selected subset of an inspected class.
///
/// # Errors
/// Returns `TemplateError` if the template fails to compile or evaluate.
pub fn render_unit(
    unit: ClassUnit,
    request: &GenerationRequest,
    template: &TemplateSource,
) -> Result<GenerationOutput, TemplateError> {
    let SelectionOutcome { methods, warnings } = select(unit.methods, request);
    let imports = aggregate(&methods);
    let text = smith_render::render(
        &unit.class_name,
        unit.package.as_deref(),
        &methods,
        imports,
        template,
    )?;

    tracing::info!(
        class = %unit.class_name,
        tests = methods.len(),
        warnings = warnings.len(),
        "generated test skeleton"
    );

    Ok(GenerationOutput {
        class_name: unit.class_name,
        package: unit.package,
        text,
        tests: methods
            .iter()
            .map(|m| format!("test_{}", m.rendered_name))
            .collect(),
        warnings,
    })
}

/// Run the whole pipeline over one source text.
///
/// # Errors
/// `GenerateError::Parse` or `GenerateError::Template`, whichever stage failed.
pub fn generate(
    source: &str,
    request: &GenerationRequest,
    template: &TemplateSource,
) -> Result<GenerationOutput, GenerateError> {
    let unit = inspect(source)?;
    Ok(render_unit(unit, request, template)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smith_core::{Selection, TestShape};

    use super::*;

    const CALC: &str = "\
class Calc {
    int add(int a, int b) { return a + b; }
    int add(double a, double b) { return (int) (a + b); }
}
";

    fn body<'a>(text: &'a str, test: &str) -> &'a str {
        let start = text
            .find(&format!("void {test}()"))
            .unwrap_or_else(|| panic!("missing {test} in:\n{text}"));
        let rest = &text[start..];
        &rest[..rest.find("\n    }\n").expect("closing brace")]
    }

    fn only(names: &[&str]) -> GenerationRequest {
        GenerationRequest {
            selection: Selection::from_names(names),
            skip_private: false,
        }
    }

    #[test]
    fn overloads_become_distinct_typed_tests() {
        let out = generate(CALC, &only(&["add"]), &TemplateSource::Builtin).expect("generates");

        assert_eq!(out.class_name, "Calc");
        assert_eq!(out.tests, vec!["test_add_int_int", "test_add_double_double"]);
        assert!(out.warnings.is_empty());
        assert!(body(&out.text, "test_add_int_int").contains("obj.add(0, 0);"));
        assert!(body(&out.text, "test_add_double_double").contains("obj.add(0.0, 0.0);"));
        assert!(!out.text.contains("import java.util"));
    }

    #[test]
    fn default_request_renders_every_calc_overload() {
        let out = generate(CALC, &GenerationRequest::default(), &TemplateSource::Builtin)
            .expect("generates");

        assert_eq!(out.tests, vec!["test_add_int_int", "test_add_double_double"]);
        assert!(out.warnings.is_empty());

        let int_body = body(&out.text, "test_add_int_int");
        assert!(int_body.contains("int result = obj.add(0, 0);"));
        assert!(int_body.contains("assertEquals(0, result);"));

        let double_body = body(&out.text, "test_add_double_double");
        assert!(double_body.contains("int result = obj.add(0.0, 0.0);"));
        assert!(double_body.contains("assertEquals(0, result);"));
    }

    #[test]
    fn array_parameters_resolve_like_their_element_type() {
        let source = "class Calc {\n    int add(int[] a) { return 0; }\n    int add(int a) { return a; }\n}\n";
        let out = generate(source, &GenerationRequest::default(), &TemplateSource::Builtin)
            .expect("generates");

        assert_eq!(out.tests, vec!["test_add_int", "test_add_int_2"]);
        assert!(body(&out.text, "test_add_int").contains("obj.add(0);"));
    }

    #[test]
    fn rendered_name_selects_a_single_overload() {
        let out = generate(CALC, &only(&["add_double_double"]), &TemplateSource::Builtin)
            .expect("generates");
        assert_eq!(out.tests, vec!["test_add_double_double"]);
    }

    #[test]
    fn inspect_names_and_classifies_every_method() {
        let unit = inspect(
            "class Store {\n    void save(Callback callback) {}\n    int size() { return 0; }\n}\n",
        )
        .expect("parses");

        let shapes: Vec<(&str, TestShape)> = unit
            .methods
            .iter()
            .map(|m| (m.rendered_name.as_str(), m.shape()))
            .collect();
        assert_eq!(
            shapes,
            vec![("save", TestShape::Async), ("size", TestShape::Plain)]
        );
        assert!(unit.methods[0].is_async);
    }

    #[test]
    fn callback_method_waits_on_future() {
        let source = "class Store {\n    void save(int id, Callback callback) {}\n}\n";
        let out = generate(source, &only(&["save"]), &TemplateSource::Builtin).expect("generates");

        let save = body(&out.text, "test_save");
        assert!(save.contains("obj.save(0, null, result -> future.complete(result));"));
        assert!(save.contains("CompletableFuture"));
        assert!(save.contains("future.get(1, TimeUnit.SECONDS)"));
        assert!(out.text.contains("import java.util.concurrent.CompletableFuture;"));
    }

    #[test]
    fn documented_throw_yields_only_exception_stub() {
        let source = "\
class Parser {
    /** May THROW on bad input. */
    int parse(String s) { return 0; }
}
";
        let out = generate(source, &GenerationRequest::default(), &TemplateSource::Builtin)
            .expect("generates");

        let parse = body(&out.text, "test_parse");
        assert!(parse.contains("assertThrows"));
        assert!(!parse.contains("assertEquals"));
    }

    #[test]
    fn missing_class_is_a_parse_error() {
        let err = generate(
            "interface Shape { double area(); }\n",
            &GenerationRequest::default(),
            &TemplateSource::Builtin,
        )
        .expect_err("no class");
        assert!(matches!(err, GenerateError::Parse(ParseError::NoClass)), "got {err:?}");
    }

    #[test]
    fn malformed_source_is_a_parse_error() {
        let err = generate(
            "class Broken { int f( { }\n",
            &GenerationRequest::default(),
            &TemplateSource::Builtin,
        )
        .expect_err("syntax");
        assert!(
            matches!(err, GenerateError::Parse(ParseError::Syntax { .. })),
            "got {err:?}"
        );
    }

    #[test]
    fn unmatched_selection_renders_empty_class_with_warnings() {
        let out = generate(CALC, &only(&["nope"]), &TemplateSource::Builtin).expect("generates");

        assert!(out.tests.is_empty());
        assert_eq!(
            out.warnings,
            vec![
                GenerationWarning::UnknownMethod("nope".to_string()),
                GenerationWarning::SelectionEmpty,
            ]
        );
        assert!(out.text.contains("public class CalcTest {\n}\n"));
    }

    #[test]
    fn template_failure_is_a_template_error() {
        let template = TemplateSource::custom("bad.j2", "{{ missing }}");
        let err = generate(CALC, &GenerationRequest::default(), &template).expect_err("undefined");
        assert!(matches!(err, GenerateError::Template(_)), "got {err:?}");
    }

    #[test]
    fn package_is_carried_into_output() {
        let source = "package com.example;\n\nclass Calc { int one() { return 1; } }\n";
        let out = generate(source, &GenerationRequest::default(), &TemplateSource::Builtin)
            .expect("generates");
        assert_eq!(out.package.as_deref(), Some("com.example"));
        assert!(out.text.starts_with("package com.example;\n"));
    }
}
