//! # smith-parser
//!
//! ast-grep-based Java front-end for testsmith.
//!
//! [`extract`] parses one source file, rejects it if tree-sitter had to
//! recover from any syntax error, and returns a [`smith_core::ClassUnit`]
//! describing the first top-level class: its name, package and every
//! method declared directly in its body.

mod java;
pub mod parser;

pub use java::extract;
pub use parser::{AstTree, check_syntax, parse_java};
