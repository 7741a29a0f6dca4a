use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ini::IniFile;

/// Typed view of the seqinfo.ini keys the converter needs.
#[derive(Debug, Clone)]
pub struct SequenceInfo {
    pub im_width: u32,
    pub im_height: u32,
    /// Image file extension including the leading dot, e.g. ".jpg".
    pub im_ext: String,
    /// Name of the image subdirectory within the sequence directory.
    pub im_dir: String,
}

/// Parse all key-value pairs under `[Sequence]` verbatim. Values are kept
/// as strings; keys are lowercased (configparser option semantics).
pub fn parse_seqinfo(path: &Path) -> Result<HashMap<String, String>> {
    let ini = IniFile::load(path)?;
    Ok(ini.section("Sequence")?.clone())
}

impl SequenceInfo {
    /// Extract the typed fields from a parsed seqinfo map. `path` is only
    /// used for error reporting.
    pub fn from_map(map: &HashMap<String, String>, path: &Path) -> Result<Self> {
        let get = |key: &str| -> Result<&String> {
            map.get(key).ok_or_else(|| Error::Config {
                path: path.to_path_buf(),
                message: format!("missing key '{}' in [Sequence]", key),
            })
        };
        let get_u32 = |key: &str| -> Result<u32> {
            let raw = get(key)?;
            raw.parse().map_err(|_| Error::Config {
                path: path.to_path_buf(),
                message: format!("{} must be a non-negative integer, got {:?}", key, raw),
            })
        };

        Ok(Self {
            im_width: get_u32("imwidth")?,
            im_height: get_u32("imheight")?,
            im_ext: get("imext")?.clone(),
            im_dir: get("imdir")?.clone(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let map = parse_seqinfo(path)?;
        Self::from_map(&map, path)
    }
}
