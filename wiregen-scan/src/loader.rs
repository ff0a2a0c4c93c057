//! Source tree loading.
//!
//! Parses every `.go` file directly under the scan root with tree-sitter
//! and groups top-level declarations by package clause.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use miette::SourceSpan;
use tree_sitter::{Node, Parser};

use crate::error::{Error, Result};
use crate::package::{DeclKind, Declaration, Package};

/// Parse every `.go` file directly under `root` into packages.
///
/// Files are visited in lexical file-name order so repeated runs over an
/// unchanged tree discover packages and declarations in the same order,
/// which is what keeps the generated output byte-identical. Any syntax
/// error aborts the whole load; no partial results are returned.
pub fn load_packages(root: impl AsRef<Path>) -> Result<IndexMap<String, Package>> {
    let root = root.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| Error::io(root, e))? {
        let entry = entry.map_err(|e| Error::io(root, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "go") {
            files.push(path);
        }
    }
    files.sort();

    let mut parser = go_parser()?;
    let mut packages: IndexMap<String, Package> = IndexMap::new();
    for path in &files {
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let file = parse_file(&mut parser, path, &source)?;
        let package = packages
            .entry(file.package.clone())
            .or_insert_with(|| Package::new(&file.package));
        for declaration in file.declarations {
            package.push(declaration);
        }
    }

    Ok(packages)
}

struct ParsedFile {
    package: String,
    declarations: Vec<Declaration>,
}

fn go_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(Error::grammar)?;
    Ok(parser)
}

fn parse_file(parser: &mut Parser, path: &Path, source: &str) -> Result<ParsedFile> {
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::parse(path, source, None, "parser produced no syntax tree"))?;
    let root = tree.root_node();

    if root.has_error() {
        let span = first_error_span(root);
        return Err(Error::parse(path, source, span, "Go syntax error"));
    }

    let mut package = None;
    let mut declarations = Vec::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        match child.kind() {
            "package_clause" => package = package_name(child, source),
            "function_declaration" => {
                if let Some(name) = declared_name(child, source) {
                    declarations.push(Declaration {
                        name,
                        kind: DeclKind::Function,
                    });
                }
            }
            "method_declaration" => {
                if let Some(name) = declared_name(child, source) {
                    declarations.push(Declaration {
                        name,
                        kind: DeclKind::Method,
                    });
                }
            }
            _ => {}
        }
    }

    let Some(package) = package else {
        return Err(Error::parse(path, source, None, "missing package clause"));
    };

    Ok(ParsedFile {
        package,
        declarations,
    })
}

fn package_name(clause: Node, source: &str) -> Option<String> {
    let mut cursor = clause.walk();
    clause
        .children(&mut cursor)
        .find(|node| node.kind() == "package_identifier")
        .and_then(|node| node.utf8_text(source.as_bytes()).ok())
        .map(str::to_string)
}

fn declared_name(node: Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|name| name.utf8_text(source.as_bytes()).ok())
        .map(str::to_string)
}

/// Byte span of the first ERROR or missing node, for the diagnostic label.
fn first_error_span(node: Node) -> Option<SourceSpan> {
    if node.is_error() || node.is_missing() {
        return Some(node.byte_range().into());
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(span) = first_error_span(child) {
            return Some(span);
        }
    }
    None
}
