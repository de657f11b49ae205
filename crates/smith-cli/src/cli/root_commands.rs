use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a JUnit 5 test skeleton for a Java source file.
    Generate(GenerateArgs),
    /// List the methods of a Java source file and their test names.
    List(ListArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Java source file to analyse.
    pub source: PathBuf,

    /// Methods to test, by base name (all overloads) or test name.
    /// Omit to test every method.
    #[arg(short, long, value_delimiter = ',')]
    pub methods: Vec<String>,

    /// Template file replacing the built-in JUnit 5 template.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output file. Defaults to `<output.dir>/<ClassName>Test.java`.
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the generated file to stdout instead of disk.
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Java source file to analyse.
    pub source: PathBuf,
}
