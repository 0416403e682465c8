// Aggregator - walks a source tree and concatenates every matching file
//
// Each included file contributes:
//
//   /* <path> */
//   <raw content>
//   <blank line>
//
// Traversal order is fixed: inside every directory, files come before
// subdirectories and each group is sorted by file name. Two runs over the
// same tree therefore produce identical output on every platform.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::error::MergeError;
use super::writer;
use crate::config::constants::DEFAULT_SUFFIX;

/// Result of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Concatenated contents with per-file delimiter comments.
    pub buffer: String,
    /// Matched paths, in the order their contents appear in `buffer`.
    pub manifest: Vec<PathBuf>,
}

impl Aggregation {
    /// True when no file matched.
    pub fn is_empty(&self) -> bool {
        self.manifest.is_empty()
    }

    /// Hand the buffer to the writer.
    pub fn write_to(&self, destination: &Path) -> Result<(), MergeError> {
        writer::write(&self.buffer, destination)
    }
}

/// Collects files whose name ends with `suffix`.
#[derive(Debug, Clone)]
pub struct Aggregator {
    suffix: String,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX)
    }
}

impl Aggregator {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Walk `root` and concatenate every matching file.
    ///
    /// Fails with [`MergeError::NotFound`] if `root` is not a directory, and
    /// with [`MergeError::Io`] on the first matching file that cannot be read.
    /// There is no partial result: on error the collected manifest is dropped.
    pub fn aggregate(&self, root: &Path) -> Result<Aggregation, MergeError> {
        if !root.is_dir() {
            return Err(MergeError::not_found(root));
        }

        debug!("Scanning {} for *{}", root.display(), self.suffix());
        let mut aggregation = Aggregation::default();

        // Links are not followed, so a symlinked directory can never loop back
        // into the walk.
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by(files_before_dirs);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    return Err(MergeError::io(path, e.into()));
                }
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !self.matches(&entry) {
                continue;
            }

            let path = entry.into_path();
            aggregation.manifest.push(path.clone());

            let content = fs::read_to_string(&path).map_err(|e| MergeError::io(&path, e))?;
            debug!("Merged {} ({} bytes)", path.display(), content.len());

            aggregation
                .buffer
                .push_str(&format!("/* {} */\n", path.display()));
            aggregation.buffer.push_str(&content);
            aggregation.buffer.push_str("\n\n");
        }

        info!("Used files: {:?}", aggregation.manifest);

        Ok(aggregation)
    }

    fn matches(&self, entry: &DirEntry) -> bool {
        if entry.file_type().is_dir() {
            return false;
        }
        if !entry.file_name().to_string_lossy().ends_with(&self.suffix) {
            return false;
        }
        // A link to a directory is not a file, whatever its name.
        !(entry.path_is_symlink() && entry.path().is_dir())
    }
}

/// Convenience wrapper around [`Aggregator::aggregate`].
pub fn aggregate(root: &Path, suffix: &str) -> Result<Aggregation, MergeError> {
    Aggregator::new(suffix).aggregate(root)
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
