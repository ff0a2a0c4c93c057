//! Generated file emission.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Suffix appended to the output file stem.
const GENERATED_SUFFIX: &str = "_set_gen.go";

/// A rendered provider-set document ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFile {
    stem: String,
    content: String,
}

impl SetFile {
    pub fn new(stem: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            content: content.into(),
        }
    }

    /// File name the document is written under, e.g. `service_set_gen.go`.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, GENERATED_SUFFIX)
    }

    /// Rendered Go source.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the document into `dir`, creating the directory if needed.
    ///
    /// Always overwrites: the generated file is owned by the generator,
    /// never edited by hand. Errors propagate to the caller.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create output directory '{}'", dir.display()))?;
        let path = dir.join(self.file_name());
        fs::write(&path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(path)
    }
}
