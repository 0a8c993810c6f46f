use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "clubhouse")]
#[command(about = "Administer tags, evidence records and golf courses from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides CLUBHOUSE_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Bearer token (overrides CLUBHOUSE_API_BEARER_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check backend connectivity
    Health {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage tags
    Tags {
        #[command(subcommand)]
        command: TagsCommands,
    },
    /// Inspect evidence records
    Evidence {
        #[command(subcommand)]
        command: EvidenceCommands,
    },
    /// Browse golf courses
    Courses {
        #[command(subcommand)]
        command: CoursesCommands,
    },
    /// Send an arbitrary request to the backend
    Request {
        /// HTTP method
        #[arg(value_enum)]
        method: HttpMethod,
        /// Endpoint path, e.g. /admin/tags
        endpoint: String,
        /// JSON request body
        #[arg(long, value_name = "JSON")]
        data: Option<String>,
        /// Success message to announce
        #[arg(long, value_name = "TEXT")]
        message: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum TagsCommands {
    /// List tags
    List {
        /// Match tag id, owner name or email, or golf course
        #[arg(short, long)]
        search: Option<String>,
        /// Only show tags with this status
        #[arg(long)]
        status: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one tag
    Get {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a tag from a JSON body
    Create {
        #[arg(long, value_name = "JSON")]
        data: String,
    },
    /// Update a tag from a JSON body
    Update {
        id: String,
        #[arg(long, value_name = "JSON")]
        data: String,
    },
    /// Delete a tag
    Delete { id: String },
    /// Print a new batch of tags for a golf course
    Print {
        /// Number of tags (1-100)
        #[arg(short, long)]
        quantity: u32,
        /// Golf course id
        #[arg(long, value_name = "ID")]
        golf_course: String,
    },
}

#[derive(Subcommand)]
pub enum EvidenceCommands {
    /// List evidence records
    List {
        /// Match id, golf course or status
        #[arg(short, long)]
        search: Option<String>,
        /// Only show records with this status
        #[arg(long)]
        status: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one evidence record with its links
    Get {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum CoursesCommands {
    /// List one page of golf courses
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        /// Sort field
        #[arg(long, default_value = "name")]
        sort: String,
        /// Sort order
        #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
        order: SortOrder,
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one golf course
    Get {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Page through golf courses interactively
    Browse,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
