pub mod config;
pub mod favorites;
pub mod search;
pub mod shell;

pub use config::handle_config_command;
pub use favorites::handle_favorites_command;
pub use search::handle_search_command;
pub use shell::handle_shell_command;
