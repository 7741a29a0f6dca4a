use clap::Parser;

/// Command-line arguments for converting SoccerNet tracking ground truth
/// to YOLO polygon labels.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Root directory containing one subdirectory per sequence
    #[arg(short = 'i', long = "root_dir")]
    pub root_dir: String,
}
