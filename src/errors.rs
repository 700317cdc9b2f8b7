use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    #[error("creating a directory")]
    Mkdir,
    #[error("creating an empty file")]
    Create,
}

/// Any failure to materialize an entry of the layout on disk.
///
/// Permission denial, a path component that exists as a plain file, a full disk and a
/// missing parent directory all surface as this one error. The run stops at the first one.
#[derive(Debug, Error, Diagnostic)]
#[error("filesystem error: {operation} at '{path}'")]
#[diagnostic(
    code(panel_scaffold::io),
    help("Check file permissions, free disk space, and that no plain file sits where a directory is expected. Re-running is safe.")
)]
pub struct FilesystemError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl FilesystemError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }
}
