//! Command-line argument definitions for the CSG CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the emitted
//! artifact, canonical formatting, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the CSG pipeline tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSG scene file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Artifact to emit
    #[arg(long, value_enum, default_value_t = Artifact::Csg)]
    pub emit: Artifact,

    /// Path to the output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Indent unit for canonical output (two spaces when omitted)
    #[arg(long)]
    pub indent: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// The artifact a run produces.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    /// Canonical CSG text.
    Csg,
    /// Generated executable-source text.
    Program,
    /// Raw parse tree as pretty-printed JSON.
    Tree,
}
