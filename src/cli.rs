use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// formpack - compile a directory of Dust templates into one browser bundle
#[derive(Parser, Debug)]
#[command(name = "formpack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'formpack' without a command to watch with the project config.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./formpack.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Overrides for the configured paths
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    /// Template directory (overrides `source.dir`)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Bundle destination (overrides `output.path`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rebuild the bundle whenever a template changes (default)
    Watch {
        #[command(flatten)]
        paths: PathArgs,

        /// Drop templates whose file was deleted
        #[arg(long)]
        prune: bool,
    },

    /// Rebuild the bundle once and exit
    Build {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Compile every template without writing the bundle (CI)
    Check {
        /// Template directory (overrides `source.dir`)
        #[arg(short, long)]
        source: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Watch {
            paths: PathArgs::default(),
            prune: false,
        }
    }
}
