use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use svn_client::{Depth, LocalClient, SvnConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "svnc",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A typed front-end for the Subversion command-line client",
    long_about = "This is a thin front-end over the svn binary for a local working copy. \
    Status is read from svn's XML output, and cleanup can delete unversioned and ignored \
    files even on svn clients older than 1.9.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "working-copy",
        global = true,
        help = "The working copy to operate on (defaults to the current directory)"
    )]
    working_copy: Option<PathBuf>,
    #[arg(
        long,
        env = "SVN_BINARY",
        default_value = "svn",
        global = true,
        help = "The svn executable to run"
    )]
    svn_binary: PathBuf,
    #[arg(long, env = "SVN_USERNAME", global = true, help = "Username passed to svn")]
    username: Option<String>,
    #[arg(
        long,
        env = "SVN_PASSWORD",
        hide_env_values = true,
        global = true,
        help = "Password passed to svn"
    )]
    password: Option<String>,
    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "add",
        about = "Schedule a file or directory for addition",
        long_about = "This command schedules the given path, relative to the working copy, for addition."
    )]
    Add {
        #[arg(index = 1, help = "The path to add")]
        path: String,
        #[arg(long, help = "Add intermediate parent directories as well")]
        parents: bool,
    },
    #[command(
        name = "commit",
        about = "Commit local changes",
        long_about = "This command commits the given paths, or the whole working copy when none are given."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(index = 1, help = "The paths to commit")]
        paths: Vec<String>,
    },
    #[command(
        name = "update",
        about = "Bring the working copy up to date",
        long_about = "This command updates the given paths, or the whole working copy, to HEAD or to the given revision."
    )]
    Update {
        #[arg(short, long, help = "The revision to update to")]
        revision: Option<u64>,
        #[arg(index = 1, help = "The paths to update")]
        paths: Vec<String>,
    },
    #[command(
        name = "status",
        about = "Show the status of working copy entries",
        long_about = "This command lists every entry svn reports, ignored and unversioned ones included."
    )]
    Status {
        #[arg(index = 1, help = "Restrict the status to this path inside the working copy")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "rm",
        visible_alias = "remove",
        about = "Schedule a file or directory for removal"
    )]
    Remove {
        #[arg(index = 1, help = "The path to remove")]
        path: String,
        #[arg(long, help = "Keep the local copy of the path")]
        keep_local: bool,
        #[arg(long, help = "Remove even if the path has local modifications")]
        force: bool,
    },
    #[command(
        name = "revert",
        about = "Undo local changes",
        long_about = "This command reverts local changes to the given paths (the working copy root by default) down to the given depth."
    )]
    Revert {
        #[arg(index = 1, default_value = ".", help = "The paths to revert")]
        paths: Vec<String>,
        #[arg(long, value_enum, default_value_t = Depth::Empty, help = "How far below each path to revert")]
        depth: Depth,
    },
    #[command(
        name = "cleanup",
        about = "Clean up the working copy",
        long_about = "Without flags this runs svn's own cleanup (locks, temporary state). \
        With --remove-unversioned and/or --remove-ignored the matching entries are deleted from disk instead."
    )]
    Cleanup {
        #[arg(long, help = "Delete unversioned files and directories")]
        remove_unversioned: bool,
        #[arg(long, help = "Delete ignored files and directories")]
        remove_ignored: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let working_copy = match &cli.working_copy {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let config = SvnConfig::default()
        .with_binary(&cli.svn_binary)
        .with_credentials(cli.username.clone(), cli.password.clone());
    let client = LocalClient::new(&working_copy, config)
        .with_context(|| format!("failed to open working copy {}", working_copy.display()))?;

    match &cli.command {
        Commands::Add { path, parents } => client
            .add(path, *parents)
            .with_context(|| format!("failed to add {path}"))?,
        Commands::Commit { message, paths } => client
            .commit(message, &as_strs(paths))
            .context("failed to commit")?,
        Commands::Update { revision, paths } => client
            .update(&as_strs(paths), *revision)
            .context("failed to update")?,
        Commands::Status { path } => {
            let entries = client
                .status(path.as_deref())
                .context("failed to query status")?;

            let mut stdout = std::io::stdout().lock();
            for entry in entries {
                let entry = entry.context("failed to read status")?;
                writeln!(stdout, "{entry}")?;
            }
        }
        Commands::Remove {
            path,
            keep_local,
            force,
        } => client
            .remove(path, *keep_local, *force)
            .with_context(|| format!("failed to remove {path}"))?,
        Commands::Revert { paths, depth } => client
            .revert(&as_strs(paths), *depth)
            .context("failed to revert")?,
        Commands::Cleanup {
            remove_unversioned,
            remove_ignored,
        } => {
            let removed = client
                .cleanup(*remove_unversioned, *remove_ignored)
                .context("failed to clean up")?;

            if *remove_unversioned || *remove_ignored {
                println!("Removed {removed} entries from {}", client.path().display());
            }
        }
    }

    Ok(())
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
