use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A terminal client for the task reminder server", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Server base URL (or set TASKDECK_SERVER env var)
    #[arg(long, value_name = "URL", env = "TASKDECK_SERVER")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
