use crate::areas::runner::{CommandOutput, CommandRunner, SvnConfig, SvnRunner};
use crate::areas::workspace::Workspace;
use crate::errors::{SvnError, SvnResult};
use std::ffi::OsString;
use std::path::Path;

/// Client bound to a local working copy.
pub struct LocalClient {
    path: Box<Path>,
    workspace: Workspace,
    runner: Box<dyn CommandRunner>,
}

impl LocalClient {
    pub fn new(path: impl AsRef<Path>, config: SvnConfig) -> SvnResult<Self> {
        Self::with_runner(path, Box::new(SvnRunner::new(config)))
    }

    pub fn with_runner(path: impl AsRef<Path>, runner: Box<dyn CommandRunner>) -> SvnResult<Self> {
        let path = path.as_ref();

        let path = path.canonicalize().map_err(|source| SvnError::Construction {
            path: path.to_path_buf(),
            source,
        })?;

        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(LocalClient {
            path: path.into_boxed_path(),
            workspace,
            runner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Runs `subcommand` inside the working copy.
    pub(crate) fn run_command(
        &self,
        subcommand: &str,
        args: &[OsString],
    ) -> SvnResult<CommandOutput> {
        self.runner.run(subcommand, args, Some(self.path()), false)
    }

    pub(crate) fn runner(&self) -> &dyn CommandRunner {
        self.runner.as_ref()
    }
}

impl std::fmt::Debug for LocalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalClient")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for LocalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<SVN(LOCAL) {}>", self.path.display())
    }
}
