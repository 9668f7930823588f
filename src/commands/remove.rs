use crate::areas::client::LocalClient;
use crate::errors::SvnResult;
use std::ffi::OsString;

impl LocalClient {
    pub fn remove(&self, rel_path: &str, keep_local: bool, force: bool) -> SvnResult<()> {
        let mut args = Vec::<OsString>::new();

        if keep_local {
            args.push("--keep-local".into());
        }

        if force {
            args.push("--force".into());
        }

        args.push(rel_path.into());

        self.run_command("rm", &args)?;

        Ok(())
    }
}
