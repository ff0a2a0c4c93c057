//! Snapshot tests for provider-set synthesis.
//!
//! These run the real pipeline (load, select, synthesize) over a temporary
//! Go tree. Run `cargo insta review` to update snapshots when making
//! intentional changes.

use std::fs;

use tempfile::TempDir;
use wiregen_codegen::{SetFile, SetMode, SynthesisOptions, synthesize};
use wiregen_scan::{MatchSet, load_packages};

fn generate(files: &[(&str, &str)], prefix: &str, mode: SetMode) -> Vec<SetFile> {
    generate_with(
        files,
        prefix,
        SynthesisOptions {
            module: "example.com/app".to_string(),
            di_package: "di".to_string(),
            mode,
            file_stem: None,
        },
    )
}

fn generate_with(files: &[(&str, &str)], prefix: &str, options: SynthesisOptions) -> Vec<SetFile> {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp.path().join(name), content).unwrap();
    }
    let packages = load_packages(temp.path()).unwrap();
    let matches = MatchSet::select(&packages, prefix);
    synthesize(&matches, &options)
}

const SERVICE_TREE: &[(&str, &str)] = &[
    (
        "a_store.go",
        "package service\n\nfunc ProvideUserStore() int { return 0 }\n\nfunc provideInternal() int { return 0 }\n",
    ),
    (
        "b_log.go",
        "package service\n\nfunc ProvideLogger() int { return 0 }\n",
    ),
    (
        "c_mock_test.go",
        "package service_test\n\nfunc ProvideMock() int { return 0 }\n",
    ),
];

#[test]
fn test_per_package_set() {
    let files = generate(SERVICE_TREE, "Provide", SetMode::PerPackage);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name(), "service_set_gen.go");
    insta::assert_snapshot!("per_package_set", files[0].content());
}

#[test]
fn test_global_set_spans_packages() {
    let tree = &[
        (
            "a.go",
            "package service\n\nfunc ProvideUserStore() int { return 0 }\n",
        ),
        (
            "b.go",
            "package auth\n\nfunc ProvideAuth() int { return 0 }\n",
        ),
    ];

    let files = generate(tree, "Provide", SetMode::Global);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name(), "di_set_gen.go");
    insta::assert_snapshot!("global_set", files[0].content());
}

#[test]
fn test_empty_match_still_renders_global_document() {
    let tree = &[("a.go", "package service\n\nfunc internal() int { return 0 }\n")];

    let files = generate(tree, "Provide", SetMode::Global);

    assert_eq!(files.len(), 1);
    insta::assert_snapshot!("empty_global_set", files[0].content());
}

#[test]
fn test_empty_match_produces_no_per_package_files() {
    let tree = &[("a.go", "package service\n\nfunc internal() int { return 0 }\n")];

    let files = generate(tree, "Provide", SetMode::PerPackage);

    assert!(files.is_empty());
}

#[test]
fn test_per_package_mode_emits_one_file_per_contributing_package() {
    let tree = &[
        (
            "a.go",
            "package service\n\nfunc ProvideUserStore() int { return 0 }\n",
        ),
        (
            "b.go",
            "package auth\n\nfunc ProvideAuth() int { return 0 }\n",
        ),
    ];

    let files = generate(tree, "Provide", SetMode::PerPackage);
    let names: Vec<String> = files.iter().map(|f| f.file_name()).collect();

    assert_eq!(names, ["service_set_gen.go", "auth_set_gen.go"]);
    // Each file registers only its own package's providers.
    assert!(files[0].content().contains("service.ProvideUserStore,"));
    assert!(!files[0].content().contains("auth.ProvideAuth"));
    assert!(files[1].content().contains("auth.ProvideAuth,"));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first = generate(SERVICE_TREE, "Provide", SetMode::Global);
    let second = generate(SERVICE_TREE, "Provide", SetMode::Global);

    assert_eq!(first, second);
}

#[test]
fn test_every_entry_qualifier_is_imported_exactly_once() {
    let tree = &[
        (
            "a.go",
            "package service\n\nfunc ProvideA() int { return 0 }\n\nfunc ProvideB() int { return 0 }\n",
        ),
        (
            "b.go",
            "package auth\n\nfunc ProvideC() int { return 0 }\n",
        ),
    ];

    let files = generate(tree, "Provide", SetMode::Global);
    let content = files[0].content();

    for package in ["service", "auth"] {
        let import_line = format!("\t\"example.com/app/{package}\"\n");
        assert_eq!(content.matches(&import_line).count(), 1);
    }
}

#[test]
fn test_explicit_file_stem_overrides_default() {
    let files = generate_with(
        &[(
            "a.go",
            "package service\n\nfunc ProvideUserStore() int { return 0 }\n",
        )],
        "Provide",
        SynthesisOptions {
            module: "example.com/app".to_string(),
            di_package: "di".to_string(),
            mode: SetMode::PerPackage,
            file_stem: Some("appset".to_string()),
        },
    );

    assert_eq!(files[0].file_name(), "appset_set_gen.go");
}
