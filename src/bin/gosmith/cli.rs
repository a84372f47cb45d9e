//! CLI definitions using clap.

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

const WORKSPACE_LAYOUT: &str = "\
Recommended workspace layout:
  <workspace-root>/
  ├── go.work         # generated by `gosmith work`
  ├── app1/           # application
  ├── app2/           # application
  └── ext/            # libraries
      ├── lib1/
      └── lib2/

Examples:
  gosmith work --path ~/projects/myworkspace
  gosmith app myapp --path ~/projects
  gosmith lib mylib --no-git --no-code
  gosmith app myapp --no-main --no-git
  gosmith app myapp --module-prefix github.com/custom-prefix/";

static VERSION: LazyLock<String> = LazyLock::new(gosmith::util::version::long_version);

/// gosmith - scaffolding for Go modules and workspaces
#[derive(Parser)]
#[command(name = "gosmith")]
#[command(author, version = VERSION.as_str(), about, long_about = None, after_help = WORKSPACE_LAYOUT)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the global and project config
    #[arg(long, global = true, env = "GOSMITH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Go workspace (go.work) from the modules below a folder
    Work(WorkArgs),

    /// Create a new Go application
    App(AppArgs),

    /// Create a new Go library
    Lib(ModuleArgs),

    /// Check that go, git and the editor can be found
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct WorkArgs {
    /// Workspace root (defaults to current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Skip Git repository initialization
    #[arg(long)]
    pub no_git: bool,

    /// Skip creation and execution of the open_vscode file
    #[arg(long)]
    pub no_code: bool,
}

#[derive(Args)]
pub struct ModuleArgs {
    /// Module name (also the folder name)
    pub name: String,

    /// Folder to create the module in (defaults to current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Module prefix, a shortcut (`vas`, `slb`, or from config) or `none`
    #[arg(long, value_name = "PREFIX")]
    pub module_prefix: Option<String>,

    /// Skip Git repository initialization
    #[arg(long)]
    pub no_git: bool,

    /// Skip creation and execution of the open_vscode file
    #[arg(long)]
    pub no_code: bool,
}

#[derive(Args)]
pub struct AppArgs {
    #[command(flatten)]
    pub module: ModuleArgs,

    /// Skip creation of main.go
    #[arg(long)]
    pub no_main: bool,
}

#[derive(Args)]
pub struct DoctorArgs {
    /// Folder whose project config to use (defaults to current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
