//! Alias table and line parsing.

use crate::error::{BookError, BookResult};
use tracing::debug;

/// Every command the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Exit,
    Add,
    Change,
    Phone,
    ShowAll,
    Hello,
    Birthday,
    Remove,
}

impl Command {
    /// Short name used in logs and argument errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::ShowAll => "show all",
            Self::Hello => "hello",
            Self::Birthday => "birthday",
            Self::Remove => "remove",
        }
    }
}

/// Built-in aliases in matching order. The first alias that prefixes the
/// input wins, so `"show all"` has to precede `"show"`.
pub const DEFAULT_ALIASES: &[(Command, &[&str])] = &[
    (Command::Exit, &["good bye", "exit", "close", "bye", "."]),
    (Command::Add, &["add", "додай"]),
    (Command::Change, &["change", "заміни"]),
    (Command::Phone, &["phone", "номер"]),
    (Command::ShowAll, &["show all", "show"]),
    (Command::Hello, &["hello", "hi"]),
    (Command::Birthday, &["birthday", "день"]),
    (Command::Remove, &["remove", "видали"]),
];

/// A routed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    pub args: Vec<String>,
}

/// Maps free-text lines to commands by case-insensitive alias prefix.
#[derive(Debug, Clone)]
pub struct CommandRouter {
    table: Vec<(Command, Vec<String>)>,
}

impl CommandRouter {
    /// Build a router from an ordered alias table.
    pub fn new(table: &[(Command, &[&str])]) -> Self {
        Self {
            table: table
                .iter()
                .map(|(command, aliases)| {
                    (*command, aliases.iter().map(|a| a.to_string()).collect())
                })
                .collect(),
        }
    }

    /// Route `line` to a command.
    ///
    /// Commands are tried in table order and aliases in declaration order;
    /// the first alias that is a case-insensitive prefix of the trimmed line
    /// wins, even if a later alias would match more of it. The rest of the
    /// line, trimmed, is split on single spaces into arguments.
    ///
    /// # Errors
    ///
    /// Returns `BookError::UnknownCommand` when no alias matches.
    pub fn parse(&self, line: &str) -> BookResult<ParsedCommand> {
        let line = line.trim();

        for (command, aliases) in &self.table {
            for alias in aliases {
                if let Some(rest) = strip_alias(line, alias) {
                    let args = split_args(rest);
                    debug!(command = command.name(), ?args, "Routed input");
                    return Ok(ParsedCommand {
                        command: *command,
                        args,
                    });
                }
            }
        }

        Err(BookError::UnknownCommand(line.to_string()))
    }
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new(DEFAULT_ALIASES)
    }
}

/// Strip `alias` from the front of `line`, ignoring case.
fn strip_alias<'a>(line: &'a str, alias: &str) -> Option<&'a str> {
    if alias.is_empty() {
        return None;
    }

    let mut chars = line.chars();
    let mut consumed = 0;
    for expected in alias.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        consumed += actual.len_utf8();
    }
    Some(&line[consumed..])
}

fn split_args(rest: &str) -> Vec<String> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(' ').map(str::to_string).collect()
}
