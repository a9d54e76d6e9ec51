use crate::plugins::{self, CompressorPlugin};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-minify",
    about = "Minify images flowing through a file pipeline",
    long_about = "img-minify detects image files by extension (jpg, jpeg, png, gif, svg), \
                  runs each through one or more compressor backends, writes the compressed \
                  result to the output directory, and reports the aggregate savings. \
                  Non-image files are copied through unchanged.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-minify ./images -o ./dist\n  \
    img-minify \"./assets/*.png\" -o ./dist --use png\n  \
    img-minify ./site -o ./build -r -v -j 8"
)]
pub struct Args {
    #[arg(help = "Input directory, glob pattern, or single file")]
    pub input: String,

    #[arg(short, long, help = "Output directory")]
    pub output: PathBuf,

    #[arg(short, long, help = "Process subdirectories recursively")]
    pub recursive: bool,

    #[arg(
        short = 'j',
        long,
        help = "Number of records processed concurrently (default: CPU count)"
    )]
    pub concurrency: Option<usize>,

    #[arg(short, long, help = "Log a line for every processed or skipped image")]
    pub verbose: bool,

    #[arg(short, long, help = "Suppress all informational output")]
    pub quiet: bool,

    #[arg(
        long = "use",
        value_enum,
        value_delimiter = ',',
        help = "Compressor backends to use instead of the default set",
        long_help = "Comma-separated list of compressor backends. When omitted, one \
                     backend per supported family is used: gif, jpeg, png, svg."
    )]
    pub use_plugins: Option<Vec<PluginKind>>,
}

/// Selectable compressor families for `--use`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PluginKind {
    Gif,
    Jpeg,
    Png,
    Svg,
}

impl PluginKind {
    pub fn build(self) -> Box<dyn CompressorPlugin> {
        match self {
            PluginKind::Gif => plugins::gif(),
            PluginKind::Jpeg => plugins::jpeg(),
            PluginKind::Png => plugins::png(),
            PluginKind::Svg => plugins::svg(),
        }
    }
}
