use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the keygate service
    Start {
        /// optional - The project path holding keygate.yaml, default will be where the command is run.
        #[clap(long, short)]
        path: Option<String>,
    },
    /// Extract the API key from an Authorization header value, e.g. "ApiKey abc123"
    Extract {
        /// The raw Authorization header value
        header_value: String,
    },
}
