//! CLI logic for the CSG pipeline tool.
//!
//! Reads a scene script from a path and emits one of three artifacts: the
//! canonical CSG text, the generated executable-source text, or the raw
//! parse tree as JSON. The artifact goes to the output path when one is
//! given, stdout otherwise.

mod args;
mod error;

pub use args::{Args, Artifact};
pub use error::CliError;

use std::fs;

use log::{debug, info};

use csg_ast::CanonicalWriter;

/// Run the CSG CLI application
///
/// Parses the input file and writes the requested artifact.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Lex/parse errors (with source position)
/// - Tree serialization errors
pub fn run(args: &Args) -> Result<(), CliError> {
    debug!("reading {}", args.input);
    let source = fs::read_to_string(&args.input)?;
    let tree = csg_parser::parse(&source)?;

    let artifact = match args.emit {
        Artifact::Csg => match &args.indent {
            Some(indent) => CanonicalWriter::with_indent(indent.as_str()).write(&tree),
            None => CanonicalWriter::new().write(&tree),
        },
        Artifact::Program => csg_ast::emit(&csg_ast::build(&tree)),
        Artifact::Tree => serde_json::to_string_pretty(&tree)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, artifact + "\n")?;
            info!("wrote {}", path);
        }
        None => println!("{artifact}"),
    }

    Ok(())
}
