use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ini::IniFile;

/// Role registry for one sequence, built from its gameinfo.ini.
#[derive(Debug)]
pub struct GameInfo {
    /// Tracklet ID -> declared role string, e.g. "player;1" or "ball;1".
    pub tracklets: HashMap<u32, String>,
    /// Tracklet ID -> category code derived from the role string.
    pub categories: HashMap<u32, u32>,
    /// The tracklet whose role string is exactly "ball;1", if any.
    pub ball_id: Option<u32>,
}

/// Map a role string to its category code by first-match substring rule:
/// goalkeeper -> 1, player -> 2, referee -> 3, anything else -> 0.
/// Case-sensitive, fixed priority order.
pub fn classify_role(role: &str) -> u32 {
    if role.contains("goalkeeper") {
        1
    } else if role.contains("player") {
        2
    } else if role.contains("referee") {
        3
    } else {
        0
    }
}

/// Parse the `[Sequence]` section of a gameinfo.ini file into the tracklet
/// registry and category map. Tracklet IDs are 1-based and contiguous up to
/// `num_tracklets`; a missing `trackletID_<i>` key is a config error.
pub fn parse_gameinfo(path: &Path) -> Result<GameInfo> {
    let ini = IniFile::load(path)?;
    let raw = ini.get("Sequence", "num_tracklets")?;
    let num_tracklets: u32 = raw.parse().map_err(|_| Error::Config {
        path: path.to_path_buf(),
        message: format!("num_tracklets must be an integer, got {:?}", raw),
    })?;
    if num_tracklets == 0 {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: "num_tracklets must be positive".to_string(),
        });
    }

    let mut tracklets = HashMap::new();
    let mut categories = HashMap::new();
    let mut ball_id = None;
    for i in 1..=num_tracklets {
        let role = ini.get("Sequence", &format!("trackletID_{}", i))?;
        categories.insert(i, classify_role(role));
        if role == "ball;1" {
            ball_id = Some(i);
        }
        tracklets.insert(i, role.to_string());
    }

    Ok(GameInfo {
        tracklets,
        categories,
        ball_id,
    })
}
