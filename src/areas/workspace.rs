use crate::errors::{SvnError, SvnResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem side of a working copy.
///
/// Removal is idempotent: a path that is already gone counts as removed
/// successfully, but is not counted.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves a path reported by `svn status` to an absolute path.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let name = Path::new(name);

        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.path.join(name)
        }
    }

    /// Deletes `path` and everything below it, returning the number of
    /// filesystem entries removed.
    ///
    /// Directory children are listed once, before anything in that directory
    /// is deleted. Symbolic links are removed, never followed.
    pub fn remove_recursively(&self, path: &Path) -> SvnResult<usize> {
        let metadata = match std::fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "already removed");
                return Ok(0);
            }
            Err(source) => {
                return Err(SvnError::Filesystem {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        // recursion anchor
        if !metadata.is_dir() {
            return Self::remove_file(path);
        }

        let mut removed = 0;
        for child in Self::list_dir(path)? {
            if Self::is_dir(&child)? {
                removed += self.remove_recursively(&child)?;
            } else {
                removed += Self::remove_file(&child)?;
            }
        }

        removed += Self::remove_empty_dir(path)?;

        Ok(removed)
    }

    fn list_dir(path: &Path) -> SvnResult<Vec<PathBuf>> {
        let to_error = |source| SvnError::Filesystem {
            path: path.to_path_buf(),
            source,
        };

        match std::fs::read_dir(path) {
            Ok(entries) => entries
                .map(|entry| entry.map(|entry| entry.path()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(to_error),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(to_error(source)),
        }
    }

    fn is_dir(path: &Path) -> SvnResult<bool> {
        match std::fs::symlink_metadata(path) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(SvnError::Filesystem {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn remove_file(path: &Path) -> SvnResult<usize> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed file");
                Ok(1)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(source) => Err(SvnError::Filesystem {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn remove_empty_dir(path: &Path) -> SvnResult<usize> {
        match std::fs::remove_dir(path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed directory");
                Ok(1)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(source) => Err(SvnError::Filesystem {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
