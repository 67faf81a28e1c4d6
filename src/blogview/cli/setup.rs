use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blogview", bin_name = "blogview", version)]
#[command(about = "Browse blog posts from a JSON API in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the posts/users API
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub api_url: Option<String>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, optionally filtered by search text and tag
    #[command(alias = "ls")]
    List {
        /// Case-insensitive match against title and body
        #[arg(short, long)]
        search: Option<String>,

        /// Only posts carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a full post by id or slug
    #[command(alias = "v")]
    View {
        /// Numeric id or title slug (e.g. "qui-est-esse")
        #[arg(required = true)]
        selector: String,
    },

    /// List every tag in use
    Tags,

    /// Get or set configuration
    Config {
        /// Configuration key (api-url, words-per-minute, preview-length)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

impl Cli {
    /// Default log level for the `-v` count; `RUST_LOG` takes precedence.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
