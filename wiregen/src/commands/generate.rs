use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result, bail};
use wiregen_codegen::{SetFile, SetMode, SynthesisOptions, synthesize};
use wiregen_scan::{MatchSet, load_packages, validate_prefix};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Provider name prefix, e.g. Provide (must start upper-case)
    #[arg(short, long)]
    pub prefix: String,

    /// Base import path of the scanned module, e.g. example.com/app
    #[arg(short, long)]
    pub module: String,

    /// Package name written into the generated file header, e.g. di
    #[arg(long = "package")]
    pub di_package: String,

    /// Output directory for generated files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Directory to scan for provider functions (defaults to current directory)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// File stem for the generated file, e.g. appset or appset.go
    #[arg(long)]
    pub filename: Option<String>,

    /// How providers are grouped into generated sets
    #[arg(long, value_enum, default_value = "per-package")]
    pub mode: Mode,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

/// CLI-side mirror of [`SetMode`].
#[derive(Clone, Copy, ValueEnum)]
pub enum Mode {
    /// One set per contributing package
    PerPackage,
    /// One set across the whole scanned module
    Global,
}

impl From<Mode> for SetMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::PerPackage => SetMode::PerPackage,
            Mode::Global => SetMode::Global,
        }
    }
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        validate_prefix(&self.prefix).unwrap_or_exit();

        let packages = load_packages(&self.path).unwrap_or_exit();
        let matches = MatchSet::select(&packages, &self.prefix);

        let options = SynthesisOptions {
            module: self.module.trim_end_matches('/').to_string(),
            di_package: self.di_package.clone(),
            mode: self.mode.into(),
            file_stem: self
                .filename
                .as_deref()
                .map(|f| f.strip_suffix(".go").unwrap_or(f).to_string()),
        };

        if options.file_stem.is_some()
            && options.mode == SetMode::PerPackage
            && matches.packages().len() > 1
        {
            bail!(
                "--filename names a single file but {} packages contributed providers; pass --mode global or drop --filename",
                matches.packages().len()
            );
        }

        let files = synthesize(&matches, &options);

        if self.dry_run {
            return self.run_preview(&files);
        }

        // Print match summary
        println!("Found {} provider functions", matches.entries().len());
        for entry in matches.entries() {
            println!("  {}.{}", entry.package, entry.func);
        }
        println!();

        if files.is_empty() {
            println!("No provider sets to generate");
            return Ok(());
        }

        for file in &files {
            let path = file
                .write(&self.output)
                .wrap_err("Failed to write generated set")?;
            println!("Generated: {}", path.display());
        }

        Ok(())
    }

    fn run_preview(&self, files: &[SetFile]) -> Result<()> {
        for file in files {
            println!("── {} ──", file.file_name());
            println!("{}", file.content());
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
