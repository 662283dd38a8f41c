// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "pick-animator")]
#[command(
    about = "Click the ball to bounce it, right-click the door to raise it",
    long_about = None
)]
pub struct Cli {
    /// JSON file overriding animation tuning
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Do not log frames-per-second
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}
