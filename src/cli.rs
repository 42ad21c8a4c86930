use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "content-based game recommender")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Build the recommender and start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the pipeline and write cleaned, normalized and domain artifacts
    Prepare,
    /// Recommend games similar to a given title
    Similar {
        /// Exact game name
        name: String,
        /// Number of recommendations
        #[arg(short, long)]
        k: Option<usize>,
    },
    /// Recommend games for a platform, genre and rating combination
    Category {
        #[arg(long)]
        platform: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        rating: String,
        /// Number of recommendations
        #[arg(short, long)]
        k: Option<usize>,
    },
}
