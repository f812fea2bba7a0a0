//! Input loading.
//!
//! Reads documents from files or stdin, enforcing the configured size
//! ceiling before any comparison work starts.

use crate::error::{DocDiffError, ErrorContext, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// A loaded document and the name used for it in reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// Display name (the path as given, or `<stdin>`)
    pub name: String,
    /// Full document text
    pub content: String,
}

impl InputDocument {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Whether `path` refers to stdin.
#[must_use]
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read one input, rejecting anything larger than `max_bytes`.
pub fn read_input(path: &Path, max_bytes: u64) -> Result<InputDocument> {
    if is_stdin(path) {
        let content = read_limited(std::io::stdin().lock(), path, max_bytes)?;
        return Ok(InputDocument::new("<stdin>", content));
    }

    let metadata = std::fs::metadata(path).map_err(|e| DocDiffError::io(path, e))?;
    if metadata.len() > max_bytes {
        return Err(DocDiffError::InputTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: max_bytes,
        });
    }

    let file = std::fs::File::open(path).map_err(|e| DocDiffError::io(path, e))?;
    let content = read_limited(file, path, max_bytes)?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(InputDocument::new(path.display().to_string(), content))
}

/// Read both inputs. At most one of them may be stdin.
pub fn read_pair(
    left: &Path,
    right: &Path,
    max_bytes: u64,
) -> Result<(InputDocument, InputDocument)> {
    if is_stdin(left) && is_stdin(right) {
        return Err(DocDiffError::validation(
            "only one input can be read from stdin",
        ));
    }
    let left = read_input(left, max_bytes).context("reading left input")?;
    let right = read_input(right, max_bytes).context("reading right input")?;
    Ok((left, right))
}

/// Read at most `max_bytes + 1` bytes so oversized streams are detected
/// without buffering them whole.
fn read_limited(reader: impl Read, path: &Path, max_bytes: u64) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| DocDiffError::io(path, e))?;

    let size = buffer.len() as u64;
    if size > max_bytes {
        return Err(DocDiffError::InputTooLarge {
            path: PathBuf::from(path),
            size,
            limit: max_bytes,
        });
    }

    String::from_utf8(buffer).map_err(|e| {
        DocDiffError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}
