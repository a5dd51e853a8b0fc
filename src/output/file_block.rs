use crate::constants::{BLOCK_SEPARATOR, PATH_HEADER_PREFIX, READ_ERROR_PREFIX};
use log::{debug, warn};
use std::fmt::Write;
use std::io;

/// Formats one file into a text block.
///
/// The block is a `Path: <display_path>` line, the file decoded as UTF-8, and a
/// `---` line. When `content` is an error, or the bytes are not valid UTF-8,
/// an `[ERROR] Could not read <display_path> → <message>` line takes the place
/// of the content and the separator is still written.
///
/// # Examples
///
/// ```
/// use content_collector::output::format_file_block;
///
/// let block = format_file_block("proj/a.txt", Ok(b"hi".to_vec()));
/// assert_eq!(block, "Path: proj/a.txt\nhi\n---\n");
/// ```
pub fn format_file_block(display_path: &str, content: io::Result<Vec<u8>>) -> String {
    let mut block = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(block, "{}{}", PATH_HEADER_PREFIX, display_path);

    match content.and_then(decode_utf8) {
        Ok(text) => {
            debug!("Emitting {} ({} bytes)", display_path, text.len());
            let _ = writeln!(block, "{}", text);
        }
        Err(e) => {
            warn!("Could not read {}: {}", display_path, e);
            let _ = writeln!(block, "{} {} → {}", READ_ERROR_PREFIX, display_path, e);
        }
    }

    let _ = writeln!(block, "{}", BLOCK_SEPARATOR);
    block
}

fn decode_utf8(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
