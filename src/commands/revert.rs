use crate::areas::client::LocalClient;
use crate::artifacts::depth::Depth;
use crate::errors::SvnResult;
use std::ffi::OsString;

pub const DEFAULT_REVERT_PATHS: [&str; 1] = ["."];

impl LocalClient {
    /// Reverts local changes to `rel_paths` down to `depth`.
    ///
    /// With `DEFAULT_REVERT_PATHS` and `Depth::Empty` only the working copy root itself is reverted.
    pub fn revert(&self, rel_paths: &[&str], depth: Depth) -> SvnResult<()> {
        let mut args = vec![OsString::from("--depth"), OsString::from(depth.as_str())];
        args.extend(rel_paths.iter().map(OsString::from));

        self.run_command("revert", &args)?;

        Ok(())
    }
}
