use serde::{Deserialize, Serialize};

/// Ordered `name -> raw value` mapping extracted from the file preamble.
///
/// Later duplicates overwrite earlier ones (last-wins), matching a linear
/// scan of the file; extraction order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    /// Scan at most `limit` lines from the start of `lines` for instrument
    /// parameters.
    ///
    /// Each line is split at the first colon, else the first tab, else the
    /// first run of two or more spaces; keys and values are trimmed. Empty
    /// lines and lines matching none of these shapes are skipped.
    pub fn extract(lines: &[&str], limit: usize) -> Self {
        let mut set = ParameterSet::default();
        for line in lines.iter().take(limit) {
            if line.trim().is_empty() {
                continue;
            }
            if let Some((key, value)) = split_param_line(line) {
                set.insert(key, value);
            }
        }
        set
    }

    fn insert(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    /// Look up a parameter by exact name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up the first parameter whose name contains `needle`,
    /// case-insensitively.
    pub fn get_containing(&self, needle: &str) -> Option<&str> {
        let needle = needle.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| k.to_lowercase().contains(&needle))
            .map(|(_, v)| v.as_str())
    }

    /// Number of distinct parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameters were extracted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split one preamble line into a key/value pair.
///
/// Delimiters are tried in order: first `:`, first tab, first run of two
/// or more consecutive spaces. Returns `None` for lines matching none of
/// them or with an empty key after trimming.
fn split_param_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = if let Some(pos) = line.find(':') {
        (&line[..pos], &line[pos + 1..])
    } else if let Some(pos) = line.find('\t') {
        (&line[..pos], &line[pos + 1..])
    } else if let Some(pos) = line.find("  ") {
        (&line[..pos], &line[pos..])
    } else {
        return None;
    };

    let key = key.trim();
    let value = value.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}
