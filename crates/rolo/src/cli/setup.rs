use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rolo",
    bin_name = "rolo",
    version,
    after_help = "Run without a command to start an interactive session.\nType `help` inside the session to list commands."
)]
#[command(about = "Single-user contact manager", long_about = None)]
pub struct Cli {
    /// Address book file (must end in .json)
    #[arg(short, long, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// A command line to run once, e.g. `list` or `delete 2`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
