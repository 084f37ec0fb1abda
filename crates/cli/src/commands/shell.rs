//! Interactive search session.
//!
//! Reads one line at a time from stdin. Plain text replaces the query; lines
//! starting with `:` are commands. Catalog responses are rendered as they
//! arrive, while the prompt stays responsive.

use std::io::Write;

use bookverse_session::SearchSession;
use bookverse_storage::FavoritesStore;
use bookverse_types::ViewMode;
use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::render;
use crate::utils::{create_catalog, load_favorites};

const HELP: &str = "\
Type a title to search. Commands:
  :next / :prev      next or previous page
  :page N            jump to page N
  :fav N             toggle favorite for the N-th listed book
  :favs              switch between search results and favorites
  :open N            show the catalog page of the N-th listed book
  :help              show this help
  :quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Query(String),
    Next,
    Prev,
    Page(u32),
    Favorite(usize),
    ToggleFavorites,
    Open(usize),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_input(line: &str) -> ShellCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return ShellCommand::Query(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();

    let number = |arg: Option<&str>| arg.and_then(|value| value.parse::<usize>().ok());

    match (name, argument) {
        ("next" | "n", None) => ShellCommand::Next,
        ("prev" | "p", None) => ShellCommand::Prev,
        ("page", Some(value)) => match value.parse::<u32>() {
            Ok(page) if page > 0 => ShellCommand::Page(page),
            _ => ShellCommand::Invalid(format!("Not a page number: {}", value)),
        },
        ("fav" | "f", arg) => match number(arg) {
            Some(index) if index > 0 => ShellCommand::Favorite(index),
            _ => ShellCommand::Invalid("Usage: :fav N".to_string()),
        },
        ("favs" | "favorites", None) => ShellCommand::ToggleFavorites,
        ("open" | "o", arg) => match number(arg) {
            Some(index) if index > 0 => ShellCommand::Open(index),
            _ => ShellCommand::Invalid("Usage: :open N".to_string()),
        },
        ("help" | "h" | "?", None) => ShellCommand::Help,
        ("quit" | "q" | "exit", None) => ShellCommand::Quit,
        _ => ShellCommand::Invalid(format!("Unknown command: {}", line)),
    }
}

pub async fn handle_shell_command(config: &Config) -> Result<()> {
    let mut favorites = load_favorites(config).await;
    let mut session = SearchSession::new(create_catalog(config)?);
    let cover_size = config.catalog.cover_size;

    println!("📚 BookVerse, powered by the Open Library API");
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(&session)?;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = parse_input(&line);
                if command == ShellCommand::Quit {
                    break;
                }
                apply_command(command, &mut session, &mut favorites).await;
                println!("{}", render::format_view(session.state(), &favorites, cover_size));
            }
            Some(_) = session.settle(), if session.in_flight().is_some() => {
                println!();
                println!("{}", render::format_view(session.state(), &favorites, cover_size));
            }
        }
    }

    println!("👋 Bye");
    Ok(())
}

async fn apply_command(
    command: ShellCommand,
    session: &mut SearchSession,
    favorites: &mut FavoritesStore,
) {
    match command {
        ShellCommand::Query(text) => session.enter_query(text),
        ShellCommand::Next => {
            if !session.next_page() {
                println!("💡 Already on the last page");
            }
        }
        ShellCommand::Prev => {
            if !session.previous_page() {
                println!("💡 Already on the first page");
            }
        }
        ShellCommand::Page(page) => session.set_page(page),
        ShellCommand::ToggleFavorites => {
            session.toggle_view_mode();
        }
        ShellCommand::Favorite(position) => {
            let Some(book) = session
                .state()
                .displayed(favorites.list())
                .get(position - 1)
                .cloned()
            else {
                println!("❌ No book #{} listed", position);
                return;
            };
            match favorites.toggle(book.clone()).await {
                Ok(true) => println!("⭐ Added to favorites: {}", book.title),
                Ok(false) => println!("🗑️  Removed from favorites: {}", book.title),
                Err(e) => {
                    tracing::error!("Failed to save favorites: {}", e);
                    println!("❌ Could not save favorites: {}", e);
                }
            }
        }
        ShellCommand::Open(position) => {
            match session.state().displayed(favorites.list()).get(position - 1) {
                Some(book) => println!("🔗 {}", book.detail_url()),
                None => println!("❌ No book #{} listed", position),
            }
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Invalid(message) => println!("❌ {}", message),
        ShellCommand::Quit => {}
    }
}

fn prompt(session: &SearchSession) -> Result<()> {
    let marker = match session.state().view_mode {
        ViewMode::Search => "🔍",
        ViewMode::Favorites => "⭐",
    };
    print!("{} > ", marker);
    std::io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_query() {
        assert_eq!(parse_input("dune\n"), ShellCommand::Query("dune".to_string()));
        assert_eq!(parse_input(""), ShellCommand::Query(String::new()));
        assert_eq!(
            parse_input("  the hobbit "),
            ShellCommand::Query("  the hobbit ".to_string())
        );
    }

    #[test]
    fn test_navigation_commands() {
        assert_eq!(parse_input(":next"), ShellCommand::Next);
        assert_eq!(parse_input(":p"), ShellCommand::Prev);
        assert_eq!(parse_input(":page 3"), ShellCommand::Page(3));
        assert!(matches!(parse_input(":page 0"), ShellCommand::Invalid(_)));
        assert!(matches!(parse_input(":page x"), ShellCommand::Invalid(_)));
    }

    #[test]
    fn test_favorite_commands() {
        assert_eq!(parse_input(":fav 2"), ShellCommand::Favorite(2));
        assert_eq!(parse_input(":favs"), ShellCommand::ToggleFavorites);
        assert!(matches!(parse_input(":fav"), ShellCommand::Invalid(_)));
        assert!(matches!(parse_input(":fav 0"), ShellCommand::Invalid(_)));
        assert_eq!(parse_input(":open 12"), ShellCommand::Open(12));
    }

    #[test]
    fn test_session_commands() {
        assert_eq!(parse_input(":help"), ShellCommand::Help);
        assert_eq!(parse_input(":q\r\n"), ShellCommand::Quit);
        assert!(matches!(parse_input(":frobnicate"), ShellCommand::Invalid(_)));
        assert!(matches!(parse_input(":next 2"), ShellCommand::Invalid(_)));
    }
}
