use crate::areas::client::LocalClient;
use crate::errors::SvnResult;
use std::ffi::OsString;

impl LocalClient {
    /// Schedules `rel_path` for addition, optionally adding missing parent directories too.
    pub fn add(&self, rel_path: &str, include_parents: bool) -> SvnResult<()> {
        let mut args = vec![OsString::from(rel_path)];

        if include_parents {
            args.push("--parents".into());
        }

        self.run_command("add", &args)?;

        Ok(())
    }
}
