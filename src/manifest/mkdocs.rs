//! Registration of the example's documentation page in `mkdocs.yml`.

use log::{debug, warn};
use regex::Regex;
use serde_yaml::Value;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::constants::{MKDOCS_FILE, NAV_EXAMPLES_SECTION, NAV_INDEX_FILENAME, NAV_INDEX_PAGE};
use crate::error::{Error, Result};
use crate::manifest::block::{block_end, find_line, indent_of, BlockSequence};
use crate::manifest::io::{parse_yaml, read_text, write_text_atomic};

static NAV_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^nav:\s*(#.*)?$").expect("nav pattern is valid"));

static EXAMPLES_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^ *- {}:\s*(#.*)?$", regex::escape(NAV_EXAMPLES_SECTION)))
        .expect("examples section pattern is valid")
});

/// The documentation site configuration of a project.
///
/// Only the examples navigation section and `extra.latest_version` are
/// interpreted. Edits touch the lines of the examples section alone.
#[derive(Debug, Clone)]
pub struct MkdocsConfig {
    path: PathBuf,
    text: String,
    document: Value,
}

impl MkdocsConfig {
    /// Reads `mkdocs.yml` from the project root.
    pub fn read<P: AsRef<Path>>(root_dir: P) -> Result<Self> {
        let path = root_dir.as_ref().join(MKDOCS_FILE);
        let text = read_text(&path)?;
        let document = parse_yaml(&text, &path)?;
        Ok(Self { path, text, document })
    }

    /// Latest released version of the project, from `extra.latest_version`.
    pub fn latest_version(&self) -> Option<&str> {
        self.document
            .get("extra")
            .and_then(|extra| extra.get("latest_version"))
            .and_then(Value::as_str)
    }

    /// Page paths of the examples navigation section, in file order.
    pub fn examples_nav(&self) -> Result<Vec<String>> {
        let section = self
            .document
            .get("nav")
            .and_then(Value::as_sequence)
            .and_then(|nav| nav.iter().find_map(|item| item.get(NAV_EXAMPLES_SECTION)))
            .ok_or_else(missing_section)?;

        let pages = section.as_sequence().ok_or_else(|| {
            Error::StructuralPrecondition(format!(
                "the '{NAV_EXAMPLES_SECTION}' navigation section is not a list"
            ))
        })?;

        pages
            .iter()
            .map(|page| {
                page.as_str().map(str::to_string).ok_or_else(|| {
                    Error::StructuralPrecondition(format!(
                        "the '{NAV_EXAMPLES_SECTION}' navigation section must only list page paths"
                    ))
                })
            })
            .collect()
    }

    /// Replaces the page paths of the examples navigation section.
    pub fn set_examples_nav(&mut self, pages: Vec<String>) -> Result<()> {
        let lines: Vec<&str> = self.text.lines().collect();
        let nav = find_line(&lines, 0, lines.len(), &NAV_KEY).ok_or_else(missing_section)?;
        let nav_end = block_end(&lines, nav, 0);
        let header = find_line(&lines, nav + 1, nav_end, &EXAMPLES_KEY)
            .ok_or_else(missing_section)?;

        let block = BlockSequence::locate(&lines, header, indent_of(lines[header]) + 2, MKDOCS_FILE)?;
        let values: Vec<Value> = pages.iter().cloned().map(Value::String).collect();
        let text = block.splice(&self.text, &values)?;

        let document: Value = serde_yaml::from_str(&text).map_err(|e| self.write_error(e))?;
        let edited = Self { path: self.path.clone(), text, document };
        if edited.examples_nav()? != pages {
            return Err(self.write_error("the edited navigation does not read back"));
        }

        *self = edited;
        Ok(())
    }

    /// Writes the configuration back to the file it was read from.
    pub fn write(&self) -> Result<()> {
        write_text_atomic(&self.path, &self.text)
    }

    fn write_error<E: ToString>(&self, reason: E) -> Error {
        Error::ConfigWriteError { path: self.path.display().to_string(), reason: reason.to_string() }
    }
}

fn missing_section() -> Error {
    Error::StructuralPrecondition(format!(
        "{MKDOCS_FILE} has no '{NAV_EXAMPLES_SECTION}' navigation section"
    ))
}

/// Path of the documentation page for the example `example_lower`.
pub fn example_page(example_lower: &str) -> String {
    format!("examples/{example_lower}.md")
}

fn is_index_page(page: &str) -> bool {
    Path::new(page).file_name() == Some(OsStr::new(NAV_INDEX_FILENAME))
}

/// Inserts the page of `example_lower` into the examples navigation.
///
/// Every `index.md` page is removed, the new page is added, the remaining
/// pages are sorted and the landing page is put back in front. A page that is
/// already listed appears only once in the result.
pub fn sync_nav(current: &[String], example_lower: &str) -> Vec<String> {
    let new_page = example_page(example_lower);
    if current.contains(&new_page) {
        warn!("'{}' is already listed in the examples navigation", new_page);
    }

    let mut pages: Vec<String> = current.to_vec();
    pages.push(new_page);
    pages.retain(|page| !is_index_page(page));
    pages.sort();
    pages.dedup();

    pages.insert(0, NAV_INDEX_PAGE.to_string());
    pages
}

/// Registers the example's page in the project's `mkdocs.yml`.
pub fn generate_mkdocs<P: AsRef<Path>>(root_dir: P, example_lower: &str) -> Result<()> {
    let mut config = MkdocsConfig::read(root_dir)?;

    let pages = sync_nav(&config.examples_nav()?, example_lower);
    debug!("Examples navigation now lists {} pages", pages.len());

    config.set_examples_nav(pages)?;
    config.write()
}
