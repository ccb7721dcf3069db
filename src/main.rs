use anyhow::Result;
use clap::{Parser, Subcommand};
use dit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "dit",
    version = "0.1.0",
    about = "A minimal version control engine",
    long_about = "dit is a minimal version control engine with content-addressable \
    storage, a staging index, branches, an additive merge and a simulated remote. \
    It is a learning project, not a git replacement.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command hashes the given files into the object store and records them in the staging index. \
        Directories are expanded recursively, honoring .ditignore patterns."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the staging index into a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history of the current branch",
        long_about = "This command walks the parent chain from the current branch tip and prints each commit, newest first."
    )]
    Log,
    #[command(
        name = "graph",
        about = "Show the commit history as a compact graph",
        long_about = "This command prints a condensed, one-line-per-commit view of the current branch history."
    )]
    Graph,
    #[command(
        name = "show",
        about = "Show a commit and its changes",
        long_about = "This command prints a commit's metadata and a line diff against its parent. \
        A unique digest prefix is accepted in place of the full digest."
    )]
    Show {
        #[arg(index = 1, help = "The commit digest (or unique prefix)")]
        revision: String,
    },
    #[command(
        name = "status",
        about = "Show staged, modified and untracked files",
        long_about = "This command compares the working tree against the staging index and the current commit."
    )]
    Status,
    #[command(
        name = "branch",
        about = "List, create or delete branches",
        long_about = "Without arguments this command lists branches. With a name it creates a branch \
        at the current commit; with --delete it removes the named branch."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: Option<String>,
        #[arg(short, long, required = false, help = "Delete the named branch")]
        delete: bool,
    },
    #[command(
        name = "checkout",
        about = "Switch to another branch",
        long_about = "This command points HEAD at the named branch and restores its latest commit to the working tree."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
    },
    #[command(
        name = "merge",
        about = "Merge another branch into the current one",
        long_about = "This command stages the additive union of the current and the named branch. \
        Paths recorded with different contents on both sides abort the merge as conflicts."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge from")]
        branch: String,
    },
    #[command(
        name = "push",
        about = "Publish a branch to a remote",
        long_about = "This command records the branch tip under the remote's ref namespace."
    )]
    Push {
        #[arg(index = 1, help = "The remote name (defaults to origin)")]
        remote: Option<String>,
        #[arg(index = 2, help = "The branch to push (defaults to the current branch)")]
        branch: Option<String>,
    },
    #[command(
        name = "pull",
        about = "Fast-forward a branch from a remote",
        long_about = "This command moves the branch ref to the digest recorded under the remote's ref namespace \
        and, for the current branch, restores that commit to the working tree."
    )]
    Pull {
        #[arg(index = 1, help = "The remote name (defaults to origin)")]
        remote: Option<String>,
        #[arg(index = 2, help = "The branch to pull (defaults to the current branch)")]
        branch: Option<String>,
    },
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => open_repository()?,
            };

            repository.init()?
        }
        Commands::Add { paths } => open_repository()?.add(paths)?,
        Commands::Commit { message } => open_repository()?.commit(message.as_str())?,
        Commands::Log => open_repository()?.log()?,
        Commands::Graph => open_repository()?.graph()?,
        Commands::Show { revision } => open_repository()?.show(revision.as_str())?,
        Commands::Status => open_repository()?.status()?,
        Commands::Branch { name, delete } => {
            open_repository()?.branch(name.as_deref(), *delete)?
        }
        Commands::Checkout { branch } => open_repository()?.checkout(branch.as_str())?,
        Commands::Merge { branch } => open_repository()?.merge(branch.as_str())?,
        Commands::Push { remote, branch } => {
            open_repository()?.push(remote.as_deref(), branch.as_deref())?
        }
        Commands::Pull { remote, branch } => {
            open_repository()?.pull(remote.as_deref(), branch.as_deref())?
        }
    }

    Ok(())
}
