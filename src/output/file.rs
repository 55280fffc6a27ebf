//! Log file creation. Two rules exist:
//!
//! - [`FileOutput::create`] always starts an empty file (truncating an old one).
//! - [`FileOutput::open_or_create`] appends to an existing regular file and only
//!   creates when nothing is there yet, building missing directories level by level.

use crate::error::Error;
use crate::internal;

use super::Output;
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// An open log file, owned by exactly one logger.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: File,
    appended: bool,
}

impl FileOutput {
    /// Creates every missing directory of `dir`, then creates `filename` inside it,
    /// truncating any previous content.
    ///
    /// # Errors
    /// `DirectoryCreation` or `FileCreation`, each carrying the OS error.
    pub fn create(dir: impl AsRef<Path>, filename: &str) -> Result<Self, Error> {
        let dir = dir.as_ref();
        check_filename(filename)?;

        if !dir.as_os_str().is_empty() {
            dir_builder(true)
                .create(dir)
                .map_err(|source| Error::DirectoryCreation {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let path = dir.join(filename);
        let file = create_truncated(&path)?;
        internal::debug("FILE", &format!("Created log file {}", path.display()));
        Ok(Self {
            path,
            file,
            appended: false,
        })
    }

    /// Appends to `dir/filename` when it is already a regular file. Otherwise walks
    /// `dir` from the left, creating each level that does not exist yet, and creates
    /// the file in the last one.
    ///
    /// # Errors
    /// `FileOpen` when the existing file cannot be opened, `DirectoryCreation` or
    /// `FileCreation` when building the path fails.
    pub fn open_or_create(dir: impl AsRef<Path>, filename: &str) -> Result<Self, Error> {
        let dir = dir.as_ref();
        check_filename(filename)?;
        let path = dir.join(filename);

        if path.is_file() {
            let file = OpenOptions::new()
                .append(true)
                .open(&path)
                .map_err(|source| Error::FileOpen {
                    path: path.clone(),
                    source,
                })?;
            internal::debug("FILE", &format!("Appending to {}", path.display()));
            return Ok(Self {
                path,
                file,
                appended: true,
            });
        }

        create_levels(dir)?;
        let file = create_truncated(&path)?;
        internal::debug("FILE", &format!("Created log file {}", path.display()));
        Ok(Self {
            path,
            file,
            appended: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file existed and was opened for appending.
    #[must_use]
    pub const fn appended(&self) -> bool {
        self.appended
    }
}

impl Output for FileOutput {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.file.write_all(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn check_filename(filename: &str) -> Result<(), Error> {
    if filename.is_empty() || filename == "." || filename == ".." {
        return Err(Error::InvalidPath(format!(
            "'{filename}' is not a usable file name"
        )));
    }
    Ok(())
}

fn dir_builder(recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

fn create_levels(dir: &Path) -> Result<(), Error> {
    let mut partial = PathBuf::new();
    for component in dir.components() {
        partial.push(component);
        if partial.is_dir() {
            continue;
        }
        if partial.exists() {
            return Err(Error::DirectoryCreation {
                path: partial,
                source: io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
            });
        }
        match dir_builder(false).create(&partial) {
            Ok(()) => {
                internal::debug("FILE", &format!("Created directory {}", partial.display()));
            }
            // Lost a race with another creator; the level is there now.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && partial.is_dir() => {}
            Err(source) => {
                internal::warn(
                    "FILE",
                    &format!("Failed to create directory {}: {source}", partial.display()),
                );
                return Err(Error::DirectoryCreation {
                    path: partial,
                    source,
                });
            }
        }
    }
    Ok(())
}

fn create_truncated(path: &Path) -> Result<File, Error> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path).map_err(|source| {
        internal::warn(
            "FILE",
            &format!("Failed to create {}: {source}", path.display()),
        );
        Error::FileCreation {
            path: path.to_path_buf(),
            source,
        }
    })
}
