//! modulegen scaffolds a new example module inside a project.
//! It renders the example's boilerplate from templates and registers the
//! example in the documentation navigation and the dependabot configuration.

/// Command-line interface module for the modulegen application
pub mod cli;

/// Common constants: template set, project layout and pinned manifest entries
pub mod constants;

/// Error types and handling for the modulegen application
pub mod error;

/// The example being generated and its derived names
pub mod example;

/// Orchestration of a generation run
pub mod generator;

/// Documentation navigation and dependabot manifests
/// Handles mkdocs.yml and .github/dependabot.yml
pub mod manifest;

/// Destination paths and file output for rendered templates
pub mod materializer;

/// Template rendering functionality
pub mod renderer;
