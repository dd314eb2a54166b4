use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

/// A single durable key-value slot holding the serialized shelf.
pub trait ShelfSlot {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;
    fn write(&mut self, contents: &str) -> Result<()>;
}

/// Slot backed by one file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShelfSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Reading shelf from {}", self.path.display()))?;
        Ok(Some(contents))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Creating shelf directory {}", parent.display()))?;
        }
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| anyhow!("Shelf location {} is not a file", self.path.display()))?;
        let tmp = self
            .path
            .with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));
        fs::write(&tmp, contents).with_context(|| format!("Writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Moving shelf into place at {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process slot. Nothing survives the process; used for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents:    Option<String>,
    fail_writes: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Every write fails, as when storage quota is exhausted.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ShelfSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("Memory slot refuses writes");
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }
}
