//! Line-level editing of a block sequence inside a YAML document.
//!
//! Only the lines of the edited sequence are rewritten. Items that survive an
//! edit keep their original text, and everything outside the sequence is
//! copied through untouched.

use regex::Regex;
use serde_yaml::Value;

use crate::error::{Error, Result};

/// Number of leading spaces of `line`.
pub fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn is_filler(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn is_item_start(line: &str, indent: usize) -> bool {
    if indent_of(line) != indent {
        return false;
    }
    let rest = &line[indent..];
    rest == "-" || rest.starts_with("- ")
}

/// Index of the first line in `lines[from..to]` matching `pattern`.
pub fn find_line(lines: &[&str], from: usize, to: usize, pattern: &Regex) -> Option<usize> {
    (from..to.min(lines.len())).find(|&idx| pattern.is_match(lines[idx]))
}

/// End (exclusive) of the value owned by the mapping key on line `header`,
/// whose key starts at `key_column`. Trailing blank and comment lines are
/// left outside the block.
pub fn block_end(lines: &[&str], header: usize, key_column: usize) -> usize {
    let mut end = header + 1;
    for (idx, line) in lines.iter().enumerate().skip(header + 1) {
        if is_filler(line) {
            continue;
        }
        let indent = indent_of(line);
        if indent < key_column || (indent == key_column && !line[indent..].starts_with('-')) {
            break;
        }
        end = idx + 1;
    }
    end
}

#[derive(Debug, Clone)]
struct Item {
    value: Value,
    lines: Vec<String>,
}

/// The items of a block sequence, with the line range they occupy.
#[derive(Debug, Clone)]
pub struct BlockSequence {
    file: String,
    start: usize,
    end: usize,
    indent: usize,
    items: Vec<Item>,
}

impl BlockSequence {
    /// Locates the block sequence held by the mapping key on line `header`.
    ///
    /// # Errors
    /// * `Error::StructuralPrecondition` if the value is not a block list
    /// * `Error::ConfigReadError` if an item cannot be parsed on its own
    pub fn locate(lines: &[&str], header: usize, key_column: usize, file: &str) -> Result<Self> {
        let end = block_end(lines, header, key_column);
        let not_a_list = || {
            Error::StructuralPrecondition(format!(
                "{file}: '{}' does not hold a block list",
                lines[header].trim()
            ))
        };

        let Some(first) = (header + 1..end).find(|&idx| !is_filler(lines[idx])) else {
            return Ok(Self {
                file: file.to_string(),
                start: end,
                end,
                indent: key_column + 2,
                items: Vec::new(),
            });
        };

        let indent = indent_of(lines[first]);
        let mut items = Vec::new();
        let mut current: Vec<String> = Vec::new();
        for line in &lines[first..end] {
            if is_item_start(line, indent) {
                if !current.is_empty() {
                    items.push(parse_item(std::mem::take(&mut current), indent, file)?);
                }
                current.push(line.to_string());
            } else if !current.is_empty() && (is_filler(line) || indent_of(line) > indent) {
                current.push(line.to_string());
            } else {
                return Err(not_a_list());
            }
        }
        items.push(parse_item(current, indent, file)?);

        Ok(Self { file: file.to_string(), start: first, end, indent, items })
    }

    /// Values of the items, in document order.
    pub fn values(&self) -> Vec<Value> {
        self.items.iter().map(|item| item.value.clone()).collect()
    }

    /// Rebuilds the document text with the sequence holding `values`.
    ///
    /// A value equal to an existing item reuses that item's lines; any other
    /// value is serialized at the sequence's indentation.
    pub fn splice(&self, text: &str, values: &[Value]) -> Result<String> {
        let lines: Vec<&str> = text.lines().collect();
        let mut unused: Vec<Option<&Item>> = self.items.iter().map(Some).collect();

        let mut out: Vec<String> = lines[..self.start].iter().map(|l| l.to_string()).collect();
        for value in values {
            let existing = unused
                .iter_mut()
                .find(|slot| matches!(slot, Some(item) if item.value == *value))
                .and_then(|slot| slot.take());
            match existing {
                Some(item) => out.extend(item.lines.iter().cloned()),
                None => out.extend(self.render_item(value)?),
            }
        }
        out.extend(lines[self.end..].iter().map(|l| l.to_string()));

        let mut spliced = out.join("\n");
        if text.ends_with('\n') {
            spliced.push('\n');
        }
        Ok(spliced)
    }

    fn render_item(&self, value: &Value) -> Result<Vec<String>> {
        let rendered =
            serde_yaml::to_string(&[value]).map_err(|e| Error::ConfigWriteError {
                path: self.file.clone(),
                reason: e.to_string(),
            })?;
        let padding = " ".repeat(self.indent);
        Ok(rendered.lines().map(|line| format!("{padding}{line}")).collect())
    }
}

fn parse_item(lines: Vec<String>, indent: usize, file: &str) -> Result<Item> {
    let dedented: Vec<&str> = lines
        .iter()
        .map(|line| if indent_of(line) >= indent { &line[indent..] } else { line.trim_start() })
        .collect();

    let parsed: Value =
        serde_yaml::from_str(&dedented.join("\n")).map_err(|e| Error::ConfigReadError {
            path: file.to_string(),
            reason: e.to_string(),
        })?;

    match parsed {
        Value::Sequence(mut values) if values.len() == 1 => {
            Ok(Item { value: values.remove(0), lines })
        }
        _ => Err(Error::ConfigReadError {
            path: file.to_string(),
            reason: format!("unexpected list item '{}'", lines[0].trim()),
        }),
    }
}
