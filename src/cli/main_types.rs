use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wkc-cli")]
#[command(about = "Command line interface tool for managing work codes over a REST API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[arg(long, global = true, env = "WKC_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Work-code management
    WorkCode {
        #[command(subcommand)]
        command: WorkCodeCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum WorkCodeCommands {
    /// List work codes
    List {
        /// Search term matched against visible fields
        #[arg(long)]
        search: Option<String>,
        /// Limit the number of results
        #[arg(long, default_value = "20")]
        limit: u32,
        /// Show all results, ignoring the limit
        #[arg(long)]
        full: bool,
    },
    /// Show a single work code
    Get {
        /// Work code ID
        id: u32,
    },
    /// Create a new work code
    Create {
        /// Short work code (max 10 characters)
        #[arg(long)]
        short_code: String,
        /// Cost code (max 10 characters)
        #[arg(long, default_value = "")]
        cost_code: String,
        /// Project code (max 10 characters)
        #[arg(long, default_value = "")]
        project_code: String,
        /// Display name (max 50 characters)
        #[arg(long)]
        name: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
        /// Status code: 0=Draft, 1=Active, 2=On Hold, 3=Closed
        #[arg(long, default_value = "0")]
        status: i64,
    },
    /// Update an existing work code
    Update {
        /// Work code ID
        id: u32,
        #[arg(long)]
        short_code: Option<String>,
        #[arg(long)]
        cost_code: Option<String>,
        #[arg(long)]
        project_code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Status code: 0=Draft, 1=Active, 2=On Hold, 3=Closed
        #[arg(long)]
        status: Option<i64>,
    },
    /// Delete a work code
    Delete {
        /// Work code ID
        id: u32,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key (api_url, timeout_seconds, default_profile)
        key: String,
        /// Configuration value
        value: String,
    },
}
