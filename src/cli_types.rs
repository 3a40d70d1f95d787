use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdsimplify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show detailed output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print errors and warnings only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite Markdown files into the simplified form, keeping file names
    Simplify(ProcessArgs),

    /// Split Markdown files into one file per second-level section
    Split(ProcessArgs),

    /// List the rewrite rules in the order they are applied
    Rules,

    /// Create a default configuration file
    Init {
        /// Where to write the configuration file
        #[arg(long, default_value = ".mdsimplify.toml")]
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Source directory; when given together with TARGET, configured pairs are not used
    #[arg(requires = "target")]
    pub source: Option<PathBuf>,

    /// Target directory for the output files
    pub target: Option<PathBuf>,

    /// Number of worker threads (default: one per CPU)
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub threads: Option<usize>,

    /// Process files one at a time
    #[arg(long, conflicts_with = "threads")]
    pub no_parallel: bool,
}

impl ProcessArgs {
    /// The directory pair given on the command line, if any
    pub fn explicit_pair(&self) -> Option<(PathBuf, PathBuf)> {
        match (&self.source, &self.target) {
            (Some(source), Some(target)) => Some((source.clone(), target.clone())),
            _ => None,
        }
    }
}
