//! ast-grep wrapper for Java sources.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;
use smith_core::ParseError;

/// The concrete AST tree type returned by [`parse_java`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

const SNIPPET_LEN: usize = 40;

/// Parse Java source into an ast-grep tree.
///
/// tree-sitter never fails outright; malformed input shows up as `ERROR`
/// or missing nodes, which [`check_syntax`] reports.
#[must_use]
pub fn parse_java(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Java.ast_grep(source)
}

/// Fail on the first `ERROR` or missing node in document order.
///
/// # Errors
/// Returns `ParseError::Syntax` with the 1-based line of the offending node.
pub fn check_syntax(tree: &AstTree) -> Result<(), ParseError> {
    let root = tree.root();
    let Some(bad) = root
        .dfs()
        .find(|node| node.is_missing() || node.kind().as_ref() == "ERROR")
    else {
        return Ok(());
    };

    let snippet = if bad.is_missing() {
        format!("missing `{}`", bad.kind())
    } else {
        let text = bad.text();
        let first_line = text.lines().next().unwrap_or_default().trim();
        let truncated: String = first_line.chars().take(SNIPPET_LEN).collect();
        format!("unexpected `{truncated}`")
    };

    Err(ParseError::Syntax {
        line: bad.start_pos().line() + 1,
        snippet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_java_produces_program_root() {
        let tree = parse_java("class A {}");
        assert_eq!(tree.root().kind().as_ref(), "program");
    }

    #[test]
    fn well_formed_source_passes_syntax_check() {
        let tree = parse_java("class A { int f(int x) { return x; } }");
        assert_eq!(check_syntax(&tree), Ok(()));
    }

    #[test]
    fn malformed_source_reports_line() {
        let tree = parse_java("class A {\n  int f(int x { return x; }\n}\n");
        let err = check_syntax(&tree).expect_err("should reject malformed source");
        let ParseError::Syntax { line, .. } = err else {
            panic!("expected syntax error, got {err:?}");
        };
        assert!((1..=2).contains(&line), "unexpected line {line}");
    }

    #[test]
    fn garbage_is_rejected() {
        let tree = parse_java("this is not java at all {{{");
        assert!(check_syntax(&tree).is_err());
    }
}
