//! Registration of the example module in `.github/dependabot.yml`.

use log::{debug, warn};
use regex::Regex;
use serde::Serialize;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::constants::{COMPOSE_MODULE_DIR, DEPENDABOT_FILE, EXAMPLES_DIR, ROOT_MODULE_DIR};
use crate::error::{Error, Result};
use crate::manifest::block::{find_line, BlockSequence};
use crate::manifest::io::{get_str, parse_yaml, read_text, write_text_atomic};

static UPDATES_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^updates:\s*(#.*)?$").expect("updates pattern is valid"));

/// Update entries that keep their position and never take part in sorting.
pub const PINNED_DIRS: [&str; 2] = [ROOT_MODULE_DIR, COMPOSE_MODULE_DIR];

#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub interval: String,
    pub day: String,
}

/// Update policy written for a newly generated example module.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateEntry {
    pub package_ecosystem: String,
    pub directory: String,
    pub schedule: Schedule,
    pub open_pull_requests_limit: u32,
    pub rebase_strategy: String,
}

impl UpdateEntry {
    /// The monthly Go modules update policy shared by every example.
    pub fn for_example(example_lower: &str) -> Self {
        Self {
            package_ecosystem: "gomod".to_string(),
            directory: example_directory(example_lower),
            schedule: Schedule { interval: "monthly".to_string(), day: "sunday".to_string() },
            open_pull_requests_limit: 3,
            rebase_strategy: "disabled".to_string(),
        }
    }

    fn to_value(&self) -> Result<Value> {
        serde_yaml::to_value(self).map_err(|e| Error::ConfigWriteError {
            path: DEPENDABOT_FILE.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Module directory of the example `example_lower`, as dependabot sees it.
pub fn example_directory(example_lower: &str) -> String {
    format!("/{EXAMPLES_DIR}/{example_lower}")
}

fn directory(entry: &Value) -> Result<&str> {
    get_str(entry, "directory").ok_or_else(|| {
        Error::StructuralPrecondition(format!("{DEPENDABOT_FILE} has an update without a directory"))
    })
}

/// Checks that the update list starts with the root and compose modules.
pub fn check_pinned_entries(updates: &[Value]) -> Result<()> {
    if updates.len() < PINNED_DIRS.len() {
        return Err(Error::StructuralPrecondition(format!(
            "{DEPENDABOT_FILE} must list at least {} updates, found {}",
            PINNED_DIRS.len(),
            updates.len()
        )));
    }

    for (position, (entry, expected)) in updates.iter().zip(PINNED_DIRS).enumerate() {
        let found = directory(entry)?;
        if found != expected {
            return Err(Error::StructuralPrecondition(format!(
                "{DEPENDABOT_FILE} update #{} must be '{}', found '{}'",
                position + 1,
                expected,
                found
            )));
        }
    }

    Ok(())
}

/// Inserts the update entry of `example_lower` into the update list.
///
/// The root and compose entries stay first and second. All other entries,
/// the new one included, are sorted by directory. An existing entry for the
/// same directory is kept as it is instead of adding a second one.
pub fn sync_updates(current: &[Value], example_lower: &str) -> Result<Vec<Value>> {
    check_pinned_entries(current)?;
    let (pinned, rest) = current.split_at(PINNED_DIRS.len());

    let new_dir = example_directory(example_lower);
    let mut tracked = false;
    let mut updates = Vec::with_capacity(rest.len() + 1);
    for entry in rest {
        let dir = directory(entry)?;
        if PINNED_DIRS.contains(&dir) {
            continue;
        }
        if dir == new_dir {
            if tracked {
                continue;
            }
            warn!("'{}' is already tracked by dependabot, keeping its entry", dir);
            tracked = true;
        }
        updates.push(entry.clone());
    }
    if !tracked {
        updates.push(UpdateEntry::for_example(example_lower).to_value()?);
    }

    // every entry was checked for a directory above
    updates.sort_by(|a, b| get_str(a, "directory").cmp(&get_str(b, "directory")));

    Ok(pinned.iter().cloned().chain(updates).collect())
}

/// The dependency update bot configuration of a project.
///
/// Edits rewrite the lines of the `updates` list alone; entries that stay
/// keep their original text.
#[derive(Debug, Clone)]
pub struct DependabotConfig {
    path: PathBuf,
    text: String,
    document: Value,
}

impl DependabotConfig {
    /// Reads `.github/dependabot.yml` from the project root.
    pub fn read<P: AsRef<Path>>(root_dir: P) -> Result<Self> {
        let path = root_dir.as_ref().join(DEPENDABOT_FILE);
        let text = read_text(&path)?;
        let document = parse_yaml(&text, &path)?;
        Ok(Self { path, text, document })
    }

    /// The `updates` list, in file order.
    pub fn updates(&self) -> Result<&[Value]> {
        self.document
            .get("updates")
            .and_then(Value::as_sequence)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                Error::StructuralPrecondition(format!("{DEPENDABOT_FILE} has no 'updates' list"))
            })
    }

    pub fn set_updates(&mut self, updates: Vec<Value>) -> Result<()> {
        let lines: Vec<&str> = self.text.lines().collect();
        let header = find_line(&lines, 0, lines.len(), &UPDATES_KEY).ok_or_else(|| {
            Error::StructuralPrecondition(format!("{DEPENDABOT_FILE} has no 'updates' list"))
        })?;

        let block = BlockSequence::locate(&lines, header, 0, DEPENDABOT_FILE)?;
        let text = block.splice(&self.text, &updates)?;

        let document: Value = serde_yaml::from_str(&text).map_err(|e| self.write_error(e))?;
        let edited = Self { path: self.path.clone(), text, document };
        if edited.updates()? != updates.as_slice() {
            return Err(self.write_error("the edited updates do not read back"));
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

/// Registers the example module in the project's dependabot configuration.
pub fn generate_dependabot_updates<P: AsRef<Path>>(root_dir: P, example_lower: &str) -> Result<()> {
    let mut config = DependabotConfig::read(root_dir)?;

    let updates = sync_updates(config.updates()?, example_lower)?;
    debug!("Dependabot now tracks {} modules", updates.len());

    config.set_updates(updates)?;
    config.write()
}
