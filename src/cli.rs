use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tatoolkit")]
#[command(about = "TA Toolkit - parse student-record commands", long_about = None)]
pub struct Cli {
    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "TATOOLKIT_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one command line and print the resulting request
    Parse {
        /// Command word and arguments (e.g., edit 2 p/98765432 e/x@y.com)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,

        /// Print the request as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read command lines from stdin and parse each one (default)
    Repl {
        /// Print requests as JSON
        #[arg(long)]
        json: bool,
    },
}
