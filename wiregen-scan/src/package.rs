//! Scanned package model.

/// Name suffix marking an external Go test package.
const TEST_PACKAGE_SUFFIX: &str = "_test";

/// A Go package discovered under the scan root.
///
/// Files are grouped by their `package` clause, not by directory name, so a
/// single directory can yield both `service` and its external test package
/// `service_test`. Declarations keep discovery order: files sorted by name,
/// then in-file source order.
#[derive(Debug, Clone)]
pub struct Package {
    name: String,
    declarations: Vec<Declaration>,
}

impl Package {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` for external test packages (`foo_test`), which are never
    /// scanned for providers.
    pub fn is_test(&self) -> bool {
        self.name.ends_with(TEST_PACKAGE_SUFFIX)
    }

    /// Top-level declarations in discovery order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub(crate) fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }
}

/// A top-level declaration found in a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
}

/// The closed set of declaration kinds the scanner records.
///
/// Only plain functions can be wire providers. Methods stay in the model so
/// the selector skips them with a pattern match instead of a downcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Function,
    Method,
}
