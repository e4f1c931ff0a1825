//! Common constants used throughout modulegen.

/// Templates rendered for every new example, in generation order.
/// Each one is read from `<template_dir>/<name>.tmpl`.
pub const TEMPLATES: [&str; 8] = [
    "ci.yml",
    "docs_example.md",
    "example_test.go",
    "example.go",
    "go.mod",
    "go.sum",
    "Makefile",
    "tools.go",
];

/// Extension carried by every template file.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Template rendered into the documentation directory.
pub const DOCS_TEMPLATE: &str = "docs_example.md";

/// Template rendered into the CI workflows directory.
pub const CI_TEMPLATE: &str = "ci.yml";

/// Template rendered into the example's `tools` package.
pub const TOOLS_TEMPLATE: &str = "tools.go";

/// Placeholder replaced by the example's lower-case name in target filenames.
pub const EXAMPLE_PLACEHOLDER: &str = "example";

/// Directory holding every example module, relative to the project root.
pub const EXAMPLES_DIR: &str = "examples";

/// Default template directory, relative to the project root.
pub const TEMPLATE_DIR: &str = "examples/_template";

/// Documentation pages for the examples, relative to the project root.
pub const DOCS_EXAMPLES_DIR: &str = "docs/examples";

/// CI workflows directory, relative to the project root.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Documentation site configuration, relative to the project root.
pub const MKDOCS_FILE: &str = "mkdocs.yml";

/// Dependency update bot configuration, relative to the project root.
pub const DEPENDABOT_FILE: &str = ".github/dependabot.yml";

/// Key of the navigation section listing the example pages.
pub const NAV_EXAMPLES_SECTION: &str = "Examples";

/// Landing page that always heads the examples navigation section.
pub const NAV_INDEX_PAGE: &str = "examples/index.md";

/// Filename identifying the landing page wherever it appears in the section.
pub const NAV_INDEX_FILENAME: &str = "index.md";

/// Example names that would overwrite the examples landing page.
pub const RESERVED_NAMES: [&str; 1] = ["index"];

/// Directory of the project's root module, always the first update entry.
pub const ROOT_MODULE_DIR: &str = "/";

/// Directory of the compose module, always the second update entry.
pub const COMPOSE_MODULE_DIR: &str = "/modules/compose";
