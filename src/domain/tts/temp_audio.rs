use std::path::Path;

use tempfile::{Builder, NamedTempFile};

/// Scoped temporary MP3 file for a single synthesis request.
///
/// The file is created under a unique name before synthesis starts and is
/// removed when the guard drops, whichever way the request ends. Nothing
/// outlives the request that created it.
pub struct TempAudioFile {
    inner: NamedTempFile,
}

impl TempAudioFile {
    /// Filename prefix for all synthesis temp files
    pub const PREFIX: &'static str = "tts-audio-";

    /// Create a uniquely named `.mp3` file in the OS temp directory
    pub fn create() -> std::io::Result<Self> {
        Self::create_in(std::env::temp_dir())
    }

    /// Create the file in a specific directory
    pub fn create_in(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let inner = Builder::new()
            .prefix(Self::PREFIX)
            .suffix(".mp3")
            .tempfile_in(dir)?;

        Ok(Self { inner })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Persist the synthesized payload to the file
    pub async fn write(&self, audio: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(self.path(), audio).await
    }

    /// Read the full file contents back
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.path()).await
    }
}
