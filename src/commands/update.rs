use crate::areas::client::LocalClient;
use crate::errors::SvnResult;
use std::ffi::OsString;

impl LocalClient {
    /// Updates `rel_paths` (the whole working copy when empty) to `revision`, or to HEAD.
    pub fn update(&self, rel_paths: &[&str], revision: Option<u64>) -> SvnResult<()> {
        let mut args = Vec::<OsString>::new();

        if let Some(revision) = revision {
            args.push("-r".into());
            args.push(revision.to_string().into());
        }
        args.extend(rel_paths.iter().map(OsString::from));

        self.run_command("update", &args)?;

        Ok(())
    }
}
