mod dispatch;
pub mod generate;
pub mod list;

use std::path::Path;

use anyhow::Context;

pub use dispatch::dispatch;

/// Read a Java source file for analysis.
fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
