#[derive(clap::Parser, Debug)]
#[clap(name = "bookverse", about = "Search Open Library and keep a list of favorite books")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Search books by title
    Search {
        /// Title to search for
        query: String,
        /// Result page to show (12 results per page)
        #[clap(long, default_value_t = 1)]
        page: u32,
        /// Toggle the favorite state of the N-th listed result
        #[clap(long, value_name = "N")]
        favorite: Option<usize>,
        /// Print the page as JSON instead of a listing
        #[clap(long)]
        json: bool,
    },
    /// Manage saved favorites
    Favorites {
        #[clap(subcommand)]
        command: FavoritesCommands,
    },
    /// Interactive search session
    Shell,
    /// Manage configuration
    Config {
        #[clap(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum FavoritesCommands {
    /// List saved favorites, most recent first
    List {
        /// Print the list as JSON
        #[clap(long)]
        json: bool,
    },
    /// Remove a favorite by its catalog key (e.g. /works/OL123W)
    Remove { key: String },
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
    /// Show all configuration
    Show,
    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[clap(long)]
        force: bool,
    },
}
