use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codingame-bundle")]
#[command(
    about = "Combine a multi-file Java bot into the single Player.java CodinGame accepts, \
                   stripping package/import preambles and nesting every class as static."
)]
pub struct Cli {
    /// TOML config file; omitted fields keep the built-in layout.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Override the source root (default "src/main/java").
    #[arg(short = 'b', long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Override the algorithm variant under <base-dir>/algo.
    #[arg(short = 'a', long = "algo")]
    pub algo: Option<String>,

    /// Override the output file path.
    #[arg(short = 'O', long = "output")]
    pub output: Option<PathBuf>,

    /// Order directory entries by file name instead of listing order.
    #[arg(short = 's', long = "sort")]
    pub sort: bool,

    /// Print the bundle to stdout instead of writing the output file.
    #[arg(short = 'o', long = "stdout", conflicts_with = "list")]
    pub stdout: bool,

    /// Print the ordered source files and exit without bundling.
    #[arg(short = 'l', long = "list")]
    pub list: bool,
}
