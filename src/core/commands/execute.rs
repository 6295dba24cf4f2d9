//! Command execution logic.

use super::{COMMANDS, Command, CommandResult};
use crate::config::terminal::{HELP_HEADER, HELP_HINT, LS_LISTING, UNKNOWN_COMMAND_PREFIX};
use crate::core::clock::Clock;
use crate::models::OutputLine;

/// Execute a parsed command and return its result.
pub fn execute_command(cmd: Command, clock: &impl Clock) -> CommandResult {
    match cmd {
        Command::Help => execute_help(),
        Command::Clear => CommandResult::clear(),
        Command::Ls => CommandResult::output(vec![OutputLine::text(LS_LISTING)]),
        Command::Echo(text) => CommandResult::output(vec![OutputLine::text(text)]),
        Command::Date => CommandResult::output(vec![OutputLine::text(clock.now().to_string())]),
        Command::Empty => CommandResult::empty(),
        Command::Unknown(token) => CommandResult::output(vec![
            OutputLine::error(format!("{} {}", UNKNOWN_COMMAND_PREFIX, token)),
            OutputLine::text(HELP_HINT),
        ]),
    }
}

fn execute_help() -> CommandResult {
    let mut lines = vec![OutputLine::text(HELP_HEADER)];
    lines.extend(
        COMMANDS
            .iter()
            .map(|(usage, description)| OutputLine::text(format!("  {:<12} - {}", usage, description))),
    );
    CommandResult::output(lines)
}
