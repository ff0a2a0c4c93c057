//! Provider selection.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::package::{DeclKind, Package};

/// A selected provider function, qualified by its owning package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRef {
    pub package: String,
    pub func: String,
}

/// The ordered result of provider selection.
///
/// Entry order is the discovery order (packages, then files, then in-file
/// declarations); the synthesizer relies on it for byte-identical output
/// across runs.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    entries: Vec<ProviderRef>,
    packages: Vec<String>,
}

impl MatchSet {
    /// Select every provider function whose name starts with `prefix`.
    ///
    /// External test packages (`*_test`) are skipped entirely. Matching is
    /// case-sensitive: prefix `Provide` does not match `provideFoo`. Only
    /// plain function declarations can be providers; methods never match.
    ///
    /// The caller validates the prefix with [`validate_prefix`] beforehand;
    /// no case validation happens here. An empty result is valid.
    pub fn select(packages: &IndexMap<String, Package>, prefix: &str) -> Self {
        let mut set = Self::default();
        for package in packages.values() {
            if package.is_test() {
                continue;
            }
            for declaration in package.declarations() {
                if declaration.kind == DeclKind::Function && declaration.name.starts_with(prefix) {
                    set.record(package.name(), &declaration.name);
                }
            }
        }
        set
    }

    fn record(&mut self, package: &str, func: &str) {
        if !self.packages.iter().any(|name| name == package) {
            self.packages.push(package.to_string());
        }
        self.entries.push(ProviderRef {
            package: package.to_string(),
            func: func.to_string(),
        });
    }

    /// Selected providers in discovery order.
    pub fn entries(&self) -> &[ProviderRef] {
        &self.entries
    }

    /// Package names that contributed at least one provider, in first-seen
    /// order. This drives import generation.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Providers owned by `package`, in discovery order.
    pub fn entries_for<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a ProviderRef> {
        self.entries
            .iter()
            .filter(move |entry| entry.package == package)
    }
}

/// Enforce the front-end prefix contract before any scanning happens.
///
/// Wire providers are exported functions, so the prefix must be non-empty
/// and start with an upper-case letter.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    let Some(first) = prefix.chars().next() else {
        return Err(Box::new(Error::EmptyPrefix));
    };
    if !first.is_uppercase() {
        return Err(Box::new(Error::UnexportedPrefix {
            prefix: prefix.to_string(),
        }));
    }
    Ok(())
}
