use crate::errors::{SvnError, SvnResult};
use derive_new::new;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const DEFAULT_BINARY: &str = "svn";

/// Binding of the external `svn` tool, fixed for the lifetime of a runner.
#[derive(Clone, PartialEq, Eq)]
pub struct SvnConfig {
    binary: PathBuf,
    username: Option<String>,
    password: Option<String>,
    env: Vec<(OsString, OsString)>,
}

impl Default for SvnConfig {
    fn default() -> Self {
        SvnConfig {
            binary: PathBuf::from(DEFAULT_BINARY),
            username: None,
            password: None,
            env: Vec::new(),
        }
    }
}

impl std::fmt::Debug for SvnConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvnConfig")
            .field("binary", &self.binary)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("env", &self.env)
            .finish()
    }
}

impl SvnConfig {
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    pub fn with_env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Global options placed before the subcommand on every invocation.
    pub fn global_args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from("--non-interactive")];

        if let Some(username) = &self.username {
            args.push("--username".into());
            args.push(username.into());
        }

        if let Some(password) = &self.password {
            args.push("--password".into());
            args.push(password.into());
        }

        args
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct CommandOutput {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl CommandOutput {
    /// stderr is appended after stdout and the stderr side is left empty.
    pub fn combined(stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        let mut stdout = stdout;
        stdout.extend(stderr);
        CommandOutput::new(stdout, Vec::new())
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    pub fn into_stdout(self) -> Vec<u8> {
        self.stdout
    }
}

/// Executes one `svn` subcommand and waits for it to exit.
pub trait CommandRunner {
    fn run(
        &self,
        subcommand: &str,
        args: &[OsString],
        working_dir: Option<&Path>,
        combine_output: bool,
    ) -> SvnResult<CommandOutput>;
}

#[derive(Debug, Clone, Default, new)]
pub struct SvnRunner {
    config: SvnConfig,
}

impl CommandRunner for SvnRunner {
    fn run(
        &self,
        subcommand: &str,
        args: &[OsString],
        working_dir: Option<&Path>,
        combine_output: bool,
    ) -> SvnResult<CommandOutput> {
        let mut command = Command::new(self.config.binary());
        command
            .args(self.config.global_args())
            .arg(subcommand)
            .args(args)
            .envs(self.config.env.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str())));

        if let Some(working_dir) = working_dir {
            command.current_dir(working_dir);
        }

        debug!(
            binary = %self.config.binary().display(),
            subcommand,
            username = ?self.config.username(),
            args = ?args.iter().map(|arg| arg.to_string_lossy()).collect::<Vec<_>>(),
            working_dir = ?working_dir,
            "running svn"
        );

        let output = command.output().map_err(|source| SvnError::Spawn {
            binary: self.config.binary().to_path_buf(),
            source,
        })?;

        if !output.status.success() {
            return Err(SvnError::Process {
                subcommand: subcommand.to_string(),
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        if combine_output {
            Ok(CommandOutput::combined(output.stdout, output.stderr))
        } else {
            Ok(CommandOutput::new(output.stdout, output.stderr))
        }
    }
}
