use clap::Parser;
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::process;

use soccernet2yolo::{process_sequence, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let root_dir = PathBuf::from(&args.root_dir);
    if !root_dir.is_dir() {
        error!(
            "The specified root_dir does not exist or is not a directory: {}",
            args.root_dir
        );
        process::exit(1);
    }

    let mut sequence_dirs: Vec<PathBuf> = match fs::read_dir(&root_dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect(),
        Err(e) => {
            error!("Failed to list {}: {}", root_dir.display(), e);
            process::exit(1);
        }
    };
    sequence_dirs.sort();

    let total = sequence_dirs.len();
    for (index, seq_dir) in sequence_dirs.iter().enumerate() {
        let name = seq_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| seq_dir.display().to_string());
        info!("Processing sequence {}/{}: {}", index + 1, total, name);

        // Fail-fast: the first failing sequence aborts the whole batch.
        if let Err(e) = process_sequence(seq_dir) {
            error!("Failed to process sequence {}: {}", name, e);
            process::exit(1);
        }
    }

    info!("Processed {} sequences.", total);
}
