use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::PathBuf;

const FAKE_SVN: &str = r#"#!/bin/sh
# $1 is always --non-interactive, $2 the subcommand
printf '%s\n' "$*" >> "$FAKE_SVN_LOG"
if [ -n "$FAKE_SVN_FAIL" ] && [ "$2" = "$FAKE_SVN_FAIL" ]; then
    echo "svn: E155004: Working copy is locked" >&2
    exit 1
fi
if [ "$2" = "status" ] && [ -f "$FAKE_SVN_STATUS" ]; then
    cat "$FAKE_SVN_STATUS"
fi
exit 0
"#;

/// A temp working copy plus a scripted stand-in for the `svn` binary.
pub struct FakeSvn {
    pub dir: TempDir,
    pub working_copy: PathBuf,
    pub binary: PathBuf,
    pub log: PathBuf,
    pub status: PathBuf,
}

impl FakeSvn {
    pub fn set_status(&self, xml: &str) {
        std::fs::write(&self.status, xml).expect("Failed to write status response");
    }

    pub fn logged_invocations(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

#[fixture]
pub fn fake_svn() -> FakeSvn {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let working_copy = dir.path().join("wc");
    std::fs::create_dir_all(&working_copy).expect("Failed to create working copy");
    let working_copy = working_copy
        .canonicalize()
        .expect("Failed to resolve working copy");
    let binary = dir.path().join("svn");
    std::fs::write(&binary, FAKE_SVN).expect("Failed to write fake svn");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake svn executable");
    }

    FakeSvn {
        log: dir.path().join("invocations.log"),
        status: dir.path().join("status.xml"),
        working_copy,
        binary,
        dir,
    }
}

pub fn run_svnc_command(fake_svn: &FakeSvn, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("svnc").expect("Failed to find svnc binary");
    cmd.current_dir(&fake_svn.working_copy)
        .env("SVN_BINARY", &fake_svn.binary)
        .env("FAKE_SVN_LOG", &fake_svn.log)
        .env("FAKE_SVN_STATUS", &fake_svn.status)
        .env("NO_COLOR", "1")
        .env_remove("SVN_USERNAME")
        .env_remove("SVN_PASSWORD")
        .env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
