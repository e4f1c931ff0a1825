//! Generation of a new example module.
//! Validates the example, renders every template into the project tree and
//! registers the example in the docs navigation and the dependabot updates.

use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{EXAMPLES_DIR, TEMPLATES, TEMPLATE_DIR};
use crate::error::{Error, Result};
use crate::example::Example;
use crate::manifest::dependabot::generate_dependabot_updates;
use crate::manifest::mkdocs::{generate_mkdocs, MkdocsConfig};
use crate::materializer::{plan_files, template_source_path, write_file};
use crate::renderer::TemplateRenderer;

/// Explicit configuration of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root of the project receiving the example.
    pub root_dir: PathBuf,
    /// Directory holding the `<template>.tmpl` files.
    pub template_dir: PathBuf,
    /// Templates to render, in order.
    pub templates: Vec<String>,
}

impl GeneratorConfig {
    /// Configuration using the project's bundled template directory and the
    /// full template set.
    pub fn new<P: Into<PathBuf>>(root_dir: P) -> Self {
        let root_dir = root_dir.into();
        let template_dir = root_dir.join(TEMPLATE_DIR);
        Self {
            root_dir,
            template_dir,
            templates: TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn with_template_dir<P: Into<PathBuf>>(mut self, template_dir: P) -> Self {
        self.template_dir = template_dir.into();
        self
    }
}

/// Generates the example described by `example` into the project.
///
/// # Flow
/// 1. Validates the example name and title
/// 2. Reads the project version from `mkdocs.yml`
/// 3. Renders every template to its destination
/// 4. Registers the docs page in `mkdocs.yml`
/// 5. Registers the module in `.github/dependabot.yml`
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The files written, in template order
///
/// # Errors
/// The first failure stops the run. Files written before it stay on disk,
/// and a manifest is either fully rewritten or left untouched.
pub fn generate(
    example: &Example,
    config: &GeneratorConfig,
    engine: &dyn TemplateRenderer,
) -> Result<Vec<PathBuf>> {
    example.validate()?;

    let example = with_project_version(example, &config.root_dir)?;
    let example_lower = example.lower();
    let context = example.context();

    fs::create_dir_all(config.root_dir.join(EXAMPLES_DIR)).map_err(Error::IoError)?;

    let plan = plan_files(&config.root_dir, &config.templates, &example_lower);
    let mut written = Vec::with_capacity(plan.len());
    for (template, target) in plan {
        let source = template_source_path(&config.template_dir, &template);
        debug!("Rendering template {}", source.display());

        let content = fs::read_to_string(&source).map_err(Error::IoError)?;
        let rendered = engine.render(&content, &context)?;
        write_file(&rendered, &target)?;
        written.push(target);
    }

    generate_mkdocs(&config.root_dir, &example_lower)?;
    generate_dependabot_updates(&config.root_dir, &example_lower)?;

    info!("Generated example '{}' ({} files)", example_lower, written.len());
    Ok(written)
}

fn with_project_version(example: &Example, root_dir: &Path) -> Result<Example> {
    let mkdocs = MkdocsConfig::read(root_dir)?;
    let version = match mkdocs.latest_version() {
        Some(version) => version.to_string(),
        None => {
            warn!("mkdocs.yml has no extra.latest_version, rendering an empty version");
            String::new()
        }
    };
    Ok(example.clone().with_tc_version(version))
}

/// Manual steps left to the user once the example is generated.
pub fn next_steps(example: &Example) -> Vec<String> {
    vec![
        format!(
            "Please go to {} directory and execute 'go mod tidy' to synchronize the dependencies",
            example.lower()
        ),
        "Commit the modified files and submit a pull request to include them into the project"
            .to_string(),
        "Thanks!".to_string(),
    ]
}
