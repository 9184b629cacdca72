use std::{io, path::Path};

use async_trait::async_trait;

/// Reads the whole content of a text file.
#[async_trait]
pub trait FileReader: Send + Sync {
    /// Returns the UTF-8 content of `path`, or an error if the file does not
    /// exist, cannot be read or is not valid UTF-8.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Writes a text payload to a file.
#[async_trait]
pub trait FileWriter: Send + Sync {
    /// Writes `contents` to `path` as UTF-8, replacing any existing file.
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// File access backed by `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileSystem;

#[async_trait]
impl FileReader for TokioFileSystem {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

#[async_trait]
impl FileWriter for TokioFileSystem {
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
