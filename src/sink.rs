//! Export sink boundary.
//!
//! A sink accepts `(text, filename)` and performs a named-file save.  The
//! engine guarantees the exact serializer output reaches the sink
//! unmodified; the sink writes it verbatim.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Accepts delimited text and saves it under a name.
pub trait ExportSink {
    /// Save `text` as `filename`.  Returns the location the text landed at.
    fn save(&self, text: &str, filename: &str) -> Result<PathBuf>;
}

/// Writes exports into a directory on the local filesystem.
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for FileExportSink {
    fn save(&self, text: &str, filename: &str) -> Result<PathBuf> {
        let path = self.dir.join(filename);
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating export directory {}", self.dir.display()))?;
        std::fs::write(&path, text)
            .with_context(|| format!("writing export to {}", path.display()))?;
        info!(path = %path.display(), bytes = text.len(), "export saved");
        Ok(path)
    }
}
