use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{Error, Result};

/// One (frame, track) observation from the ground-truth table.
///
/// gt/gt.txt is headerless, comma-delimited, exactly seven columns in this
/// order. Box coordinates may be negative or extend past the image bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationRow {
    pub frame_id: u32,
    pub track_id: u32,
    pub x0: i64,
    pub y0: i64,
    pub width: i64,
    pub height: i64,
    pub gt_flag: i64,
}

/// The ground-truth table for one sequence, grouped by frame.
///
/// Loaded once per sequence and reused for every frame lookup.
#[derive(Debug, Default)]
pub struct GtTable {
    by_frame: HashMap<u32, Vec<AnnotationRow>>,
}

impl GtTable {
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_path(path)
            .map_err(|e| Error::Config {
                path: path.to_path_buf(),
                message: format!("failed to open ground-truth table: {}", e),
            })?;

        let mut by_frame: HashMap<u32, Vec<AnnotationRow>> = HashMap::new();
        for result in reader.deserialize::<AnnotationRow>() {
            let row = result.map_err(|e| Error::MalformedTable {
                path: path.to_path_buf(),
                line: e.position().map_or(0, |p| p.line()),
                message: e.to_string(),
            })?;
            by_frame.entry(row.frame_id).or_default().push(row);
        }

        Ok(Self { by_frame })
    }

    /// Rows for one frame in their original file order. Frames with no
    /// observations yield an empty slice, not an error.
    pub fn rows_for_frame(&self, frame_id: u32) -> &[AnnotationRow] {
        self.by_frame
            .get(&frame_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct frames that have at least one row.
    pub fn num_frames(&self) -> usize {
        self.by_frame.len()
    }
}
