//! One line of driver input

use crate::shell::error::{ShellError, ShellResult};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add`, `push` or `enqueue` followed by one or more tokens
    Add(Vec<String>),
    /// `find` / `search`
    Find(String),
    /// `remove` / `delete`
    Remove(String),
    /// `pop` / `dequeue`
    Take,
    Peek,
    Print,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> ShellResult<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "add" | "insert" | "push" | "enqueue" => {
                let tokens: Vec<String> = words.map(str::to_string).collect();
                if tokens.is_empty() {
                    return Err(ShellError::MissingArgument("value to add"));
                }
                Command::Add(tokens)
            }
            "find" | "search" => Command::Find(Self::single(words, "value to find")?),
            "remove" | "delete" => Command::Remove(Self::single(words, "value to remove")?),
            "pop" | "dequeue" => Command::Take,
            "peek" => Command::Peek,
            "print" | "show" => Command::Print,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(ShellError::UnknownCommand(name.to_string())),
        };

        Ok(Some(command))
    }

    /// Command word as typed in help output
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Find(_) => "find",
            Command::Remove(_) => "remove",
            Command::Take => "pop",
            Command::Peek => "peek",
            Command::Print => "print",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    fn single<'a>(
        mut words: impl Iterator<Item = &'a str>,
        what: &'static str,
    ) -> ShellResult<String> {
        words
            .next()
            .map(str::to_string)
            .ok_or(ShellError::MissingArgument(what))
    }
}

/// Reject tokens longer than `max` characters
pub fn check_length(token: &str, max: usize) -> ShellResult<()> {
    let len = token.chars().count();
    if len > max {
        return Err(ShellError::KeyTooLong { len, max });
    }
    Ok(())
}

/// Parse a list, stack or queue value
pub fn parse_int(token: &str) -> ShellResult<i32> {
    token
        .parse()
        .map_err(|_| ShellError::InvalidNumber(token.to_string()))
}
