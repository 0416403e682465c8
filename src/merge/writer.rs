// Writer - persists the merged buffer to the destination file
//
// The destination is created or truncated unconditionally. The handle is
// scoped to this function, so it is closed on every exit path.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::error::MergeError;

/// Write `buffer` verbatim to `destination`, replacing any existing content.
pub fn write(buffer: &str, destination: &Path) -> Result<(), MergeError> {
    let file = File::create(destination).map_err(|e| MergeError::io(destination, e))?;
    let mut out = BufWriter::new(file);

    out.write_all(buffer.as_bytes())
        .map_err(|e| MergeError::io(destination, e))?;
    // BufWriter's Drop ignores flush errors.
    out.flush().map_err(|e| MergeError::io(destination, e))?;

    debug!("Wrote {} bytes to {}", buffer.len(), destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_buffer_creates_empty_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("merged.css");

        write("", &out).unwrap();
        assert_eq!(fs::metadata(&out).unwrap().len(), 0);
    }

    #[test]
    fn overwrites_existing_content() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("merged.css");
        fs::write(&out, "a much longer stale body that must disappear").unwrap();

        write("fresh", &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "fresh");
    }

    #[test]
    fn missing_parent_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("no").join("such").join("merged.css");

        let err = write("x", &out).unwrap_err();
        assert!(matches!(err, MergeError::Io { .. }), "got: {err:?}");
        assert_eq!(err.path(), out.as_path());
    }

    #[test]
    fn directory_destination_is_io_error() {
        let tmp = TempDir::new().unwrap();

        let err = write("x", tmp.path()).unwrap_err();
        assert!(matches!(err, MergeError::Io { .. }), "got: {err:?}");
    }
}
