// src/output/writer.rs

//! Manages the output destination (stdout or file).

use crate::config::OutputDestination;
use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Creates the writer for an [`OutputDestination`].
///
/// # Errors
/// Returns an error if the output file cannot be created.
pub fn setup_output_writer(destination: &OutputDestination) -> Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match destination {
        OutputDestination::Stdout => Box::new(io::stdout()),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file))
        }
    };
    Ok(writer)
}

/// Writes the collected text followed by a single newline and flushes.
pub fn write_output(
    writer: &mut dyn Write,
    output: &str,
    destination: &OutputDestination,
) -> Result<()> {
    let target = match destination {
        OutputDestination::Stdout => "<stdout>".to_string(),
        OutputDestination::File(path) => path.display().to_string(),
    };
    writeln!(writer, "{}", output).map_err(|e| io_error_with_path(e, &target))?;
    writer.flush().map_err(|e| io_error_with_path(e, &target))?;
    Ok(())
}
