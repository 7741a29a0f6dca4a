use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Minimal INI reader for gameinfo.ini / seqinfo.ini files.
///
/// Matches the configparser semantics these files rely on: `[Section]`
/// headers, `key = value` (or `key : value`) pairs, option names lowercased
/// so lookups like `imWidth` and `trackletID_3` are case-insensitive,
/// full-line `;`/`#` comments ignored. Section names stay case-sensitive.
#[derive(Debug)]
pub struct IniFile {
    path: PathBuf,
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: format!("failed to read file: {}", e),
        })?;

        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for (lineno, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                let name = line[1..line.len() - 1].trim().to_string();
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }
            let Some((key, value)) = line.split_once('=').or_else(|| line.split_once(':')) else {
                return Err(Error::Config {
                    path: path.to_path_buf(),
                    message: format!("line {}: expected 'key = value', got {:?}", lineno + 1, raw),
                });
            };
            let Some(section) = &current else {
                return Err(Error::Config {
                    path: path.to_path_buf(),
                    message: format!("line {}: key-value pair outside any section", lineno + 1),
                });
            };
            sections
                .entry(section.clone())
                .or_default()
                .insert(key.trim().to_lowercase(), value.trim().to_string());
        }

        Ok(Self {
            path: path.to_path_buf(),
            sections,
        })
    }

    /// Look up a section, failing with a `Config` error if it is absent.
    pub fn section(&self, name: &str) -> Result<&HashMap<String, String>> {
        self.sections.get(name).ok_or_else(|| Error::Config {
            path: self.path.clone(),
            message: format!("missing [{}] section", name),
        })
    }

    /// Look up a single key within a section. Key lookup is
    /// case-insensitive, like configparser option access.
    pub fn get(&self, section: &str, key: &str) -> Result<&str> {
        self.section(section)?
            .get(&key.to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| Error::Config {
                path: self.path.clone(),
                message: format!("missing key '{}' in [{}]", key, section),
            })
    }
}
