//! Go package scanning and provider discovery for wiregen.
//!
//! This crate is the input side of the pipeline: [`load_packages`] parses
//! every `.go` file under a scan root into [`Package`] values, and
//! [`MatchSet::select`] picks out the provider functions matching a name
//! prefix. Synthesis of the generated set file lives in `wiregen-codegen`.

mod error;
mod loader;
mod package;
mod selector;

pub use error::{Error, Result};
pub use loader::load_packages;
pub use package::{DeclKind, Declaration, Package};
pub use selector::{MatchSet, ProviderRef, validate_prefix};
