use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read buffer size used when streaming a file.
const READ_BUFFER_SIZE: usize = 32 * 1024;

/// Count the `\n` bytes in the file at `path`.
///
/// A trailing line without a terminator is not counted, so a file holding
/// `"a\nb"` reports one line.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] when the file cannot be opened or a read
/// fails partway through.
pub fn count_lines(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    count_newlines(&mut reader).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Streaming newline count over any buffered reader.
pub fn count_newlines<R: BufRead>(reader: &mut R) -> std::io::Result<u64> {
    let mut lines = 0u64;
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }
        lines += bytecount::count(buf, b'\n') as u64;
        let len = buf.len();
        reader.consume(len);
    }
    Ok(lines)
}
