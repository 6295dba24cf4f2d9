//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `interpret` for running one raw input line end to end
//!
//! # Architecture
//!
//! A raw line is parsed into the `Command` enum, then executed via
//! `execute_command`. Matching on the command token is case-insensitive;
//! argument text is always taken from the original line.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use crate::core::clock::Clock;

/// Usage and one-line description of every command, in `help` order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Affiche cette aide"),
    ("clear", "Efface le terminal"),
    ("ls", "Liste les fichiers du répertoire courant"),
    ("echo [texte]", "Affiche le texte"),
    ("date", "Affiche la date et l'heure actuelles"),
];

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Ls,
    /// Payload with its original casing and inner spacing.
    Echo(String),
    Date,
    /// Blank input line
    Empty,
    /// Lower-cased token that matched nothing
    Unknown(String),
}

impl Command {
    /// Parse one raw input line.
    ///
    /// The line is trimmed, the token before the first whitespace run is
    /// lower-cased for matching, and the remainder is kept verbatim.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let split = line.find(char::is_whitespace).unwrap_or(line.len());
        let (token, rest) = line.split_at(split);

        match token.to_lowercase().as_str() {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "ls" => Self::Ls,
            "echo" => Self::Echo(strip_separator(rest).to_string()),
            "date" => Self::Date,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Drop exactly one leading whitespace character.
fn strip_separator(rest: &str) -> &str {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}

/// Parse and execute one input line. Never fails: unknown commands come
/// back as an error line inside the result.
pub fn interpret(line: &str, clock: &impl Clock) -> CommandResult {
    execute_command(Command::parse(line), clock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("ls"), Command::Ls);
        assert_eq!(Command::parse("date"), Command::Date);
    }

    #[test]
    fn test_parse_ignores_arguments_of_fixed_commands() {
        assert_eq!(Command::parse("ls -la /tmp"), Command::Ls);
        assert_eq!(Command::parse("help me"), Command::Help);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Command::Help);
        assert_eq!(Command::parse("CleAr"), Command::Clear);
        assert_eq!(Command::parse("Echo Hi"), Command::Echo("Hi".to_string()));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \t  "), Command::Empty);
    }

    #[test]
    fn test_parse_trims_outer_whitespace() {
        assert_eq!(Command::parse("   ls   "), Command::Ls);
        assert_eq!(
            Command::parse("  echo Hello  "),
            Command::Echo("Hello".to_string())
        );
    }

    #[test]
    fn test_parse_echo_payload() {
        assert_eq!(
            Command::parse("echo Hello World"),
            Command::Echo("Hello World".to_string())
        );
        assert_eq!(
            Command::parse("echo   spaced   out"),
            Command::Echo("  spaced   out".to_string())
        );
        assert_eq!(Command::parse("echo"), Command::Echo(String::new()));
        assert_eq!(
            Command::parse("echo\tTabbed"),
            Command::Echo("Tabbed".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_is_lowercased() {
        assert_eq!(
            Command::parse("FooBar baz"),
            Command::Unknown("foobar".to_string())
        );
        assert_eq!(
            Command::parse("echoes"),
            Command::Unknown("echoes".to_string())
        );
    }

    #[test]
    fn test_parse_non_ascii_token() {
        assert_eq!(
            Command::parse("ÉCHO salut"),
            Command::Unknown("écho".to_string())
        );
    }
}
