//! Import block assembly for generated Go files.

/// Import path of the injection framework named in every generated file.
pub const WIRE_IMPORT: &str = "github.com/google/wire";

/// An ordered, deduplicated Go import block.
///
/// Paths render in insertion order, never sorted lexically: insertion order
/// is the documented discovery order, and keeping it is what makes two runs
/// over an unchanged tree byte-identical.
#[derive(Debug, Clone, Default)]
pub struct ImportBlock {
    paths: Vec<String>,
}

impl ImportBlock {
    /// Create a new empty import block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path. Re-adding an existing path is a no-op.
    pub fn add(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    /// Iterate over import paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
