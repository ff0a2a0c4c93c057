//! Provider-set synthesis.

use wiregen_scan::{MatchSet, ProviderRef};

use crate::code_builder::CodeBuilder;
use crate::imports::{ImportBlock, WIRE_IMPORT};
use crate::set_file::SetFile;

/// How matched providers are grouped into generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetMode {
    /// One `<pkg>_set_gen.go` per contributing package, each registering
    /// only that package's providers.
    #[default]
    PerPackage,
    /// A single file registering every match across all scanned packages.
    Global,
}

/// Inputs the synthesizer substitutes into the template.
///
/// Values arrive pre-validated from the front-end: the module path has its
/// trailing slash stripped and the file stem its `.go` suffix. Malformed
/// values pass through uninterpreted.
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    /// Base import path qualifying each package, e.g. `example.com/app`.
    pub module: String,
    /// Package name written into the generated file header.
    pub di_package: String,
    pub mode: SetMode,
    /// Overrides the default file stem. Only meaningful when a single
    /// document is produced.
    pub file_stem: Option<String>,
}

/// Render the generated documents for `matches`.
///
/// Import lines follow first-seen package order and entry lines follow
/// discovery order, so unchanged input renders byte-identical output. In
/// global mode an empty match set still yields one well-formed document;
/// in per-package mode it yields none.
pub fn synthesize(matches: &MatchSet, options: &SynthesisOptions) -> Vec<SetFile> {
    match options.mode {
        SetMode::PerPackage => matches
            .packages()
            .iter()
            .map(|package| {
                let mut imports = ImportBlock::new();
                imports.add(format!("{}/{}", options.module, package));
                imports.add(WIRE_IMPORT);

                let entries: Vec<&ProviderRef> = matches.entries_for(package).collect();
                let stem = options
                    .file_stem
                    .clone()
                    .unwrap_or_else(|| package.clone());
                render(&options.di_package, package, &imports, &entries, &stem)
            })
            .collect(),
        SetMode::Global => {
            let mut imports = ImportBlock::new();
            for package in matches.packages() {
                imports.add(format!("{}/{}", options.module, package));
            }
            imports.add(WIRE_IMPORT);

            let entries: Vec<&ProviderRef> = matches.entries().iter().collect();
            let stem = options
                .file_stem
                .clone()
                .unwrap_or_else(|| options.di_package.clone());
            vec![render(
                &options.di_package,
                &options.di_package,
                &imports,
                &entries,
                &stem,
            )]
        }
    }
}

fn render(
    di_package: &str,
    owner: &str,
    imports: &ImportBlock,
    entries: &[&ProviderRef],
    stem: &str,
) -> SetFile {
    let builder = CodeBuilder::new()
        .line(&format!("package {di_package}"))
        .blank()
        .group("import (", ")", |mut b| {
            for path in imports.iter() {
                b = b.line(&format!("\"{path}\""));
            }
            b
        })
        .blank()
        .group(&format!("var {owner}Set = wire.NewSet("), ")", |mut b| {
            for entry in entries {
                b = b.line(&format!("{}.{},", entry.package, entry.func));
            }
            b
        });
    SetFile::new(stem, builder.build())
}
