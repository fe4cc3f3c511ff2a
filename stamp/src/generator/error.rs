use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort a generator run.
///
/// Both variants wrap the underlying I/O error; nothing is retried.
#[derive(Debug)]
pub enum GenerateError {
    /// The template could not be read.
    ReadTemplate { path: PathBuf, source: io::Error },
    /// The output artifact (or its parent directory) could not be written.
    WriteOutput { path: PathBuf, source: io::Error },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::ReadTemplate { path, source } => {
                write!(f, "failed to read template {}: {source}", path.display())
            }
            GenerateError::WriteOutput { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::ReadTemplate { source, .. } => Some(source),
            GenerateError::WriteOutput { source, .. } => Some(source),
        }
    }
}
