use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// emoji-catalog: emoji metadata catalogs from Unicode CLDR
#[derive(Parser)]
#[command(name = "emoji-catalog")]
#[command(version)]
#[command(about = "Builds per-language and global emoji catalogs from Unicode CLDR annotations")]
#[command(
    long_about = "emoji-catalog reads CLDR labels and annotation files, writes one JSON catalog per language plus a shared global.json, and carries curated emoticons forward from the previous global.json."
)]
pub struct Cli {
    /// Log verbosity (overridden by RUST_LOG when set)
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build catalogs from an extracted CLDR release
    Build {
        /// Extracted CLDR release (or a directory containing one)
        #[arg(long)]
        cldr: PathBuf,

        /// Output directory for the catalogs
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Previously published global.json
        #[arg(long)]
        previous: Option<PathBuf>,

        /// Configuration file (defaults to ./emoji-catalog.yaml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only build these languages (repeatable)
        #[arg(short, long = "language")]
        languages: Vec<String>,

        /// Exclude languages that fail to parse instead of aborting
        #[arg(long)]
        isolate_failures: bool,

        /// Number of parallel language workers
        #[arg(long)]
        workers: Option<usize>,

        /// Record this CLDR release in cldr_version.txt
        #[arg(long)]
        release: Option<String>,
    },

    /// Download and unpack a CLDR release
    #[cfg(feature = "fetch")]
    Fetch {
        /// CLDR release number
        #[arg(long)]
        release: Option<String>,

        /// Extraction directory
        #[arg(long, default_value = "cldr-release")]
        dest: PathBuf,

        /// Configuration file (defaults to ./emoji-catalog.yaml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Download a release, build all catalogs, and clean up
    #[cfg(feature = "fetch")]
    Run {
        /// CLDR release number
        #[arg(long)]
        release: Option<String>,

        /// Output directory for the catalogs
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Previously published global.json
        #[arg(long)]
        previous: Option<PathBuf>,

        /// Configuration file (defaults to ./emoji-catalog.yaml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Keep the extracted release in this directory
        #[arg(long)]
        keep_source: Option<PathBuf>,
    },

    /// List configured languages and their output files
    Languages {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build { .. } => "build",
            #[cfg(feature = "fetch")]
            Commands::Fetch { .. } => "fetch",
            #[cfg(feature = "fetch")]
            Commands::Run { .. } => "run",
            Commands::Languages { .. } => "languages",
        }
    }

    /// Check if this command writes catalogs
    pub fn writes_catalogs(&self) -> bool {
        match self {
            Commands::Build { .. } => true,
            #[cfg(feature = "fetch")]
            Commands::Run { .. } => true,
            _ => false,
        }
    }

    /// Check if this command needs network access
    pub fn requires_network(&self) -> bool {
        match self {
            #[cfg(feature = "fetch")]
            Commands::Fetch { .. } | Commands::Run { .. } => true,
            _ => false,
        }
    }
}
