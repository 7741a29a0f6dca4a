use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::conversion::{format_label_line, rectangle_to_polygon};
use crate::error::{Error, Result};
use crate::gameinfo::GameInfo;
use crate::gt::AnnotationRow;
use crate::seqinfo::SequenceInfo;

/// Build the label file content for one frame: one line per non-ball
/// object, in the rows' original order. A frame with no rows yields an
/// empty string.
pub fn frame_label_lines(
    frame_id: u32,
    rows: &[AnnotationRow],
    game_info: &GameInfo,
    seq_info: &SequenceInfo,
) -> Result<String> {
    let mut content = String::with_capacity(rows.len() * 96);
    for row in rows {
        if Some(row.track_id) == game_info.ball_id {
            continue;
        }
        let category = *game_info
            .categories
            .get(&row.track_id)
            .ok_or(Error::UnknownTrack {
                track_id: row.track_id,
                frame_id,
            })?;
        let polygon = rectangle_to_polygon(
            row.x0,
            row.y0,
            row.width,
            row.height,
            seq_info.im_width,
            seq_info.im_height,
        )?;
        content.push_str(&format_label_line(category, &polygon));
        content.push('\n');
    }
    Ok(content)
}

/// Write the label file for one frame. The content is built in memory
/// first and truncate-written, so stale content from a prior run can never
/// survive partially. Frames with zero objects still get an (empty) file.
pub fn write_frame_labels(
    frame_id: u32,
    rows: &[AnnotationRow],
    game_info: &GameInfo,
    seq_info: &SequenceInfo,
    out_path: &Path,
) -> Result<()> {
    let content = frame_label_lines(frame_id, rows, game_info, seq_info)?;
    let mut file = File::create(out_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
