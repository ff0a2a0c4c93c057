//! Go source synthesis for wiregen.
//!
//! Turns a [`wiregen_scan::MatchSet`] into rendered `_set_gen.go` documents
//! and writes them to the output directory. Synthesis is purely textual:
//! nothing about the providers' signatures is validated here, wire does
//! that when the generated set is compiled.

mod code_builder;
mod imports;
mod set_file;
mod synthesizer;

pub use code_builder::CodeBuilder;
pub use imports::{ImportBlock, WIRE_IMPORT};
pub use set_file::SetFile;
pub use synthesizer::{SetMode, SynthesisOptions, synthesize};
