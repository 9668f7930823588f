use crate::areas::client::LocalClient;
use crate::errors::SvnResult;
use std::ffi::OsString;

impl LocalClient {
    /// Commits `rel_paths`, or the whole working copy when empty.
    pub fn commit(&self, message: &str, rel_paths: &[&str]) -> SvnResult<()> {
        let mut args = vec![OsString::from("-m"), OsString::from(message)];
        args.extend(rel_paths.iter().map(OsString::from));

        self.run_command("commit", &args)?;

        Ok(())
    }
}
