//! The example being generated and the case variants derived from its name.

use std::sync::LazyLock;

use cruet::Inflector;
use regex::Regex;

use crate::constants::RESERVED_NAMES;
use crate::error::{Error, Result};

static ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("alphabetic pattern is valid"));

/// A new example module, as supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Example {
    /// Fully qualified name of the container image used by the example.
    pub image: String,
    /// Name of the example. Only alphabetical characters are allowed.
    pub name: String,
    /// Title override for names with mixed casing, e.g. "MongoDB".
    pub title: Option<String>,
    /// Latest released version of the project, rendered into `go.mod`.
    pub tc_version: String,
}

impl Example {
    pub fn new<S: Into<String>>(name: S, title: Option<S>, image: S) -> Self {
        Self {
            image: image.into(),
            name: name.into(),
            title: title.map(Into::into),
            tc_version: String::new(),
        }
    }

    /// Sets the project version rendered into the templates.
    pub fn with_tc_version<S: Into<String>>(mut self, tc_version: S) -> Self {
        self.tc_version = tc_version.into();
        self
    }

    /// The name in lower case: "MongoDB" -> "mongodb".
    pub fn lower(&self) -> String {
        self.name.to_lowercase()
    }

    /// The title override when given, otherwise the title case of [`Example::lower`].
    pub fn title(&self) -> String {
        match self.title_override() {
            Some(title) => title.to_string(),
            None => self.lower().to_title_case(),
        }
    }

    /// The title with its first character lower-cased: "MongoDB" -> "mongoDB".
    ///
    /// Without an override this is the title case of [`Example::lower`].
    pub fn lower_title(&self) -> String {
        match self.title_override() {
            Some(title) => {
                let mut chars = title.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            None => self.lower().to_title_case(),
        }
    }

    /// Checks that the name and the title override, if one was given, are
    /// purely alphabetic, and that the name is not reserved.
    pub fn validate(&self) -> Result<()> {
        if !ALPHABETIC.is_match(&self.name) {
            return Err(Error::ValidationError { field: "name", value: self.name.clone() });
        }

        if RESERVED_NAMES.contains(&self.lower().as_str()) {
            return Err(Error::ReservedName(self.name.clone()));
        }

        if let Some(title) = &self.title {
            if !ALPHABETIC.is_match(title) {
                return Err(Error::ValidationError { field: "title", value: title.clone() });
            }
        }

        Ok(())
    }

    /// Template context exposing the example and its derived names.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "image": self.image,
            "tc_version": self.tc_version,
            "lower": self.lower(),
            "title": self.title(),
            "lower_title": self.lower_title(),
        })
    }

    fn title_override(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }
}
