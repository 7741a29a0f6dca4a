//! SoccerNet tracking ground truth to YOLO format converter
//!
//! This library converts per-sequence MOT-style ground-truth annotations
//! (gt/gt.txt plus gameinfo.ini and seqinfo.ini) into one YOLO polygon
//! label file per image frame.

pub mod config;
pub mod conversion;
pub mod error;
pub mod gameinfo;
pub mod gt;
pub mod ini;
pub mod labels;
pub mod seqinfo;
pub mod sequence;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use conversion::{format_label_line, rectangle_to_polygon};
pub use error::{Error, Result};
pub use gameinfo::{classify_role, parse_gameinfo, GameInfo};
pub use gt::{AnnotationRow, GtTable};
pub use labels::write_frame_labels;
pub use seqinfo::{parse_seqinfo, SequenceInfo};
pub use sequence::process_sequence;
