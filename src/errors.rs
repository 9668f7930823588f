use std::path::PathBuf;
use thiserror::Error;

pub type SvnResult<T> = Result<T, SvnError>;

#[derive(Debug, Error)]
pub enum SvnError {
    #[error("cannot bind working copy {}: {source}", path.display())]
    Construction {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path {} is not relative to the working copy", path.display())]
    OutsideWorkingCopy { path: PathBuf },

    #[error("failed to spawn {}: {source}", binary.display())]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("svn {subcommand} exited with {}: {}", describe_exit(*exit_code), stderr.trim())]
    Process {
        subcommand: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("malformed status output: {0}")]
    Parse(String),

    #[error("unknown status code '{code}' for {path}")]
    UnknownStatusCode { code: String, path: String },

    #[error("failed to remove {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<quick_xml::Error> for SvnError {
    fn from(e: quick_xml::Error) -> Self {
        SvnError::Parse(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for SvnError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        SvnError::Parse(e.to_string())
    }
}

fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
