use glob::glob;
use log::warn;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::gameinfo::parse_gameinfo;
use crate::gt::GtTable;
use crate::labels::write_frame_labels;
use crate::seqinfo::SequenceInfo;
use crate::utils::{create_output_directory, create_progress_bar};

/// Enumerate the image files of a sequence, sorted lexicographically so
/// output order is deterministic across runs.
fn enumerate_images(img_dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*{}", img_dir.display(), ext);
    let mut paths: Vec<PathBuf> = glob(&pattern)
        .map_err(|e| Error::Config {
            path: img_dir.to_path_buf(),
            message: format!("bad image glob pattern: {}", e),
        })?
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Derive the frame stem from an image filename by stripping the declared
/// extension. The stem keeps any zero-padding and names the label file.
fn frame_stem<'a>(image_path: &'a Path, ext: &str) -> Option<&'a str> {
    image_path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(ext))
}

/// Process one sequence directory: parse its configuration, load and group
/// the ground-truth table once, regenerate the labels directory from
/// scratch, and write one label file per image frame.
///
/// Fail-fast: the first error aborts the sequence and propagates to the
/// caller. Image files whose stem is not an integer frame number cannot
/// correspond to a ground-truth frame and are skipped with a warning.
pub fn process_sequence(seq_dir: &Path) -> Result<()> {
    let game_info = parse_gameinfo(&seq_dir.join("gameinfo.ini"))?;
    let seq_info = SequenceInfo::load(&seq_dir.join("seqinfo.ini"))?;
    let gt_table = GtTable::load(&seq_dir.join("gt/gt.txt"))?;

    let img_dir = seq_dir.join(&seq_info.im_dir);
    let label_dir = create_output_directory(&seq_dir.join("labels"))?;

    let image_paths = enumerate_images(&img_dir, &seq_info.im_ext)?;
    let pb = create_progress_bar(image_paths.len() as u64, "Frames");

    for image_path in &image_paths {
        let Some(stem) = frame_stem(image_path, &seq_info.im_ext) else {
            pb.inc(1);
            continue;
        };
        let Ok(frame_id) = stem.parse::<u32>() else {
            warn!(
                "Skipping image with non-numeric frame stem: {}",
                image_path.display()
            );
            pb.inc(1);
            continue;
        };

        let rows = gt_table.rows_for_frame(frame_id);
        let label_path = label_dir.join(format!("{}.txt", stem));
        write_frame_labels(frame_id, rows, &game_info, &seq_info, &label_path)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(())
}
