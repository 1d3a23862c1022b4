use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "mojob job feed client")]
pub struct Cli {
    /// API base URL (defaults to $MOJOB_API_URL, then the public API)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print the decoded response as JSON instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List position functions
    Positions,
    /// Fetch the first page of the job feed
    Listings {
        /// Page size: all, 25 or 5 (other values are ignored)
        #[arg(short, long)]
        page_size: Option<String>,
    },
    /// Search position functions
    Search {
        /// Search text, sent as-is
        query: String,
    },
}
