use derive_new::new;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use svn_client::{CommandOutput, CommandRunner, SvnError, SvnResult};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Invocation {
    pub subcommand: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub combine_output: bool,
}

/// Records every invocation and answers `status` from a queue of canned responses.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    invocations: Rc<RefCell<Vec<Invocation>>>,
    status_responses: Rc<RefCell<VecDeque<String>>>,
    failure: Option<(String, i32, String)>,
}

impl FakeRunner {
    pub fn with_status_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let runner = FakeRunner::default();
        runner
            .status_responses
            .borrow_mut()
            .extend(responses.into_iter().map(Into::into));
        runner
    }

    pub fn failing_on(mut self, subcommand: &str, exit_code: i32, stderr: &str) -> Self {
        self.failure = Some((subcommand.to_string(), exit_code, stderr.to_string()));
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    pub fn subcommands(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|invocation| invocation.subcommand.clone())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(
        &self,
        subcommand: &str,
        args: &[OsString],
        working_dir: Option<&Path>,
        combine_output: bool,
    ) -> SvnResult<CommandOutput> {
        self.invocations.borrow_mut().push(Invocation::new(
            subcommand.to_string(),
            args.iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            working_dir.map(Path::to_path_buf),
            combine_output,
        ));

        if let Some((failing, exit_code, stderr)) = &self.failure {
            if failing == subcommand {
                return Err(SvnError::Process {
                    subcommand: subcommand.to_string(),
                    exit_code: Some(*exit_code),
                    stderr: stderr.clone(),
                });
            }
        }

        let stdout = match subcommand {
            "status" => self
                .status_responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| "<status/>".to_string()),
            _ => String::new(),
        };

        Ok(CommandOutput::new(stdout.into_bytes(), Vec::new()))
    }
}
