//! Destination paths and file output for the rendered example templates.

use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CI_TEMPLATE, DOCS_EXAMPLES_DIR, DOCS_TEMPLATE, EXAMPLES_DIR, EXAMPLE_PLACEHOLDER,
    TEMPLATE_EXTENSION, TOOLS_TEMPLATE, WORKFLOWS_DIR,
};
use crate::error::{Error, Result};

/// Where a template's output belongs in the project tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// The documentation page, written to the docs directory.
    Docs,
    /// The CI workflow, written to the workflows directory.
    Workflow,
    /// The tools package, written to the example's `tools` directory.
    Tools,
    /// Everything else, written to the example's own directory.
    Module,
}

impl TemplateKind {
    /// Classifies a template by its name, ignoring case.
    pub fn of(template: &str) -> Self {
        if template.eq_ignore_ascii_case(DOCS_TEMPLATE) {
            TemplateKind::Docs
        } else if template.eq_ignore_ascii_case(CI_TEMPLATE) {
            TemplateKind::Workflow
        } else if template.eq_ignore_ascii_case(TOOLS_TEMPLATE) {
            TemplateKind::Tools
        } else {
            TemplateKind::Module
        }
    }
}

/// Path of the template file backing `template` inside `template_dir`.
pub fn template_source_path<P: AsRef<Path>>(template_dir: P, template: &str) -> PathBuf {
    template_dir.as_ref().join(format!("{template}.{TEMPLATE_EXTENSION}"))
}

/// Resolves where the output of `template` is written for the example `lower`.
///
/// # Arguments
/// * `root_dir` - Root of the project receiving the example
/// * `template` - Template name without its `.tmpl` extension
/// * `lower` - Lower-case name of the example
pub fn resolve_target_path<P: AsRef<Path>>(root_dir: P, template: &str, lower: &str) -> PathBuf {
    let root_dir = root_dir.as_ref();
    let example_dir = root_dir.join(EXAMPLES_DIR).join(lower);

    match TemplateKind::of(template) {
        TemplateKind::Docs => root_dir.join(DOCS_EXAMPLES_DIR).join(format!("{lower}.md")),
        TemplateKind::Workflow => {
            root_dir.join(WORKFLOWS_DIR).join(format!("{lower}-example.yml"))
        }
        TemplateKind::Tools => example_dir.join("tools").join(template),
        TemplateKind::Module => example_dir.join(template.replace(EXAMPLE_PLACEHOLDER, lower)),
    }
}

/// Builds the ordered template -> destination plan for a generation run.
pub fn plan_files<P: AsRef<Path>>(
    root_dir: P,
    templates: &[String],
    lower: &str,
) -> IndexMap<String, PathBuf> {
    templates
        .iter()
        .map(|template| {
            let target = resolve_target_path(&root_dir, template, lower);
            debug!("Template '{}' resolves to {}", template, target.display());
            (template.clone(), target)
        })
        .collect()
}

/// Writes `content` to `dest_path`, creating missing parent directories and
/// overwriting any existing file.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    debug!("Writing file: {}", dest_path.display());
    fs::write(dest_path, content).map_err(Error::IoError)
}
