use crate::areas::client::LocalClient;
use crate::artifacts::status::parser::StatusEntries;
use crate::errors::{SvnError, SvnResult};
use std::ffi::OsString;
use std::path::Path;

impl LocalClient {
    /// Runs `svn status --no-ignore --xml` over the working copy, or over `rel_path` inside it.
    ///
    /// The process runs to completion here; the returned entries are parsed as they are consumed.
    /// Every call issues a fresh invocation. An absolute `rel_path` is rejected before svn runs.
    pub fn status(&self, rel_path: Option<&Path>) -> SvnResult<StatusEntries> {
        let target = match rel_path {
            Some(rel_path) if rel_path.is_absolute() || rel_path.has_root() => {
                return Err(SvnError::OutsideWorkingCopy {
                    path: rel_path.to_path_buf(),
                });
            }
            Some(rel_path) => self.path().join(rel_path),
            None => self.path().to_path_buf(),
        };

        let args = vec![
            OsString::from("--no-ignore"),
            OsString::from("--xml"),
            target.into_os_string(),
        ];

        let output = self
            .runner()
            .run("status", &args, Some(self.path()), true)?;

        Ok(StatusEntries::new(output.into_stdout()))
    }
}
