use std::path::{Path, PathBuf};

use anyhow::Context;
use smith_config::SmithConfig;
use smith_core::{GenerationRequest, Selection};
use smith_render::TemplateSource;

use crate::cli::{GenerateArgs, GlobalFlags, OutputFormat};
use crate::output::{self, GenerationSummary};
use crate::pipeline;

/// Handle `tsm generate`.
pub fn handle(args: &GenerateArgs, config: &SmithConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = super::read_source(&args.source)?;
    let unit = pipeline::inspect(&source)?;

    if args.methods.is_empty() && !flags.quiet {
        eprintln!("{} methods in {}:", unit.methods.len(), unit.class_name);
        eprintln!(
            "{}",
            output::render(&output::method_rows(&unit.methods), OutputFormat::Table)?
        );
    }

    let template = load_template(args.template.as_deref(), config)?;
    let request = GenerationRequest {
        selection: Selection::from_names(&args.methods),
        skip_private: config.generation.skip_private,
    };
    let generated = pipeline::render_unit(unit, &request, &template)?;

    if args.stdout {
        print!("{}", generated.text);
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.path_for(&generated.class_name));
    write_test_file(&path, &generated.text)?;
    tracing::info!(path = %path.display(), "wrote test file");

    if !flags.quiet {
        let summary = GenerationSummary::new(&generated, &path);
        println!("{}", output::render_record(&summary, flags.format)?);
    }
    Ok(())
}

/// Resolve the template: `--template` first, then `template.path`, then built-in.
fn load_template(cli_path: Option<&Path>, config: &SmithConfig) -> anyhow::Result<TemplateSource> {
    let path: Option<PathBuf> = cli_path
        .map(Path::to_path_buf)
        .or_else(|| config.template.external_path());

    let Some(path) = path else {
        return Ok(TemplateSource::Builtin);
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read template {}", path.display()))?;
    Ok(TemplateSource::custom(path.display().to_string(), text))
}

/// Write the generated file, creating missing parent directories.
fn write_test_file(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}
