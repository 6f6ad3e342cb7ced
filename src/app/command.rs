//! Colon-command parsing.

use super::types::Tab;

/// A recognised colon-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(Tab),
    Theme,
    Login,
    Logout,
    Help,
    Clear,
    Quit,
    /// Anything else; carries the text as typed (trimmed).
    Unknown(String),
}

impl Command {
    /// Trim, lowercase and strip one leading `:` before matching.
    pub fn parse(input: &str) -> Command {
        let literal = input.trim();
        let lowered = literal.to_lowercase();
        let name = lowered.strip_prefix(':').unwrap_or(&lowered);

        match name {
            "about" => Command::Navigate(Tab::About),
            "projects" => Command::Navigate(Tab::Projects),
            "experiences" => Command::Navigate(Tab::Experiences),
            "blog" => Command::Navigate(Tab::Blog),
            "contact" => Command::Navigate(Tab::Contact),
            "stats" => Command::Navigate(Tab::Stats),
            "messages" => Command::Navigate(Tab::Messages),
            "theme" => Command::Theme,
            "login" => Command::Login,
            "logout" => Command::Logout,
            "help" | "?" | "h" => Command::Help,
            "clear" => Command::Clear,
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown(literal.to_string()),
        }
    }
}
