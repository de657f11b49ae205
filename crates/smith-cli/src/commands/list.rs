use crate::cli::{GlobalFlags, ListArgs};
use crate::output;
use crate::pipeline;

/// Handle `tsm list`.
pub fn handle(args: &ListArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = super::read_source(&args.source)?;
    let unit = pipeline::inspect(&source)?;
    tracing::debug!(class = %unit.class_name, methods = unit.methods.len(), "listing methods");
    output::output(&output::method_rows(&unit.methods), flags.format)
}
