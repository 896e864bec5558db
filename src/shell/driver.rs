//! Per-structure command handlers

use crate::chain::IntList;
use crate::config::Config;
use crate::linked::{Queue, Stack};
use crate::shell::command::{Command, check_length, parse_int};
use crate::shell::error::{ShellError, ShellResult};
use crate::table::StringTable;
use crate::trie::Trie;
use std::io::Write;

/// A data structure the shell can drive
pub trait Driver {
    /// Short name, used as the prompt
    fn name(&self) -> &'static str;

    /// Help text listing the supported commands
    fn usage(&self) -> &'static str;

    /// Apply one command, writing its outcome to `out`
    fn execute(&mut self, command: Command, out: &mut dyn Write) -> ShellResult<()>;

    /// Final state, printed when the session ends
    fn summary(&self) -> String;
}

fn unsupported(command: &Command) -> ShellError {
    ShellError::Unsupported(command.name().to_string())
}

/// Drives a [`StringTable`]
#[derive(Debug)]
pub struct TableDriver {
    table: StringTable,
    max_key_len: usize,
}

impl TableDriver {
    pub fn new(config: &Config) -> ShellResult<Self> {
        Ok(Self {
            table: config.build_table()?,
            max_key_len: config.max_key_len,
        })
    }

    pub fn table(&self) -> &StringTable {
        &self.table
    }

    pub fn into_table(self) -> StringTable {
        self.table
    }
}

impl Driver for TableDriver {
    fn name(&self) -> &'static str {
        "table"
    }

    fn usage(&self) -> &'static str {
        "add <key>...  find <key>  remove <key>  print  quit"
    }

    fn execute(&mut self, command: Command, out: &mut dyn Write) -> ShellResult<()> {
        match command {
            Command::Add(keys) => {
                for key in keys {
                    check_length(&key, self.max_key_len)?;
                    let bucket = self.table.insert(&key)?;
                    writeln!(out, "added {} to bucket {}", key, bucket)?;
                }
            }
            Command::Find(key) => {
                check_length(&key, self.max_key_len)?;
                let found = self.table.find(&key)?;
                writeln!(out, "found {} in bucket {}", found.key, found.bucket)?;
            }
            Command::Remove(key) => {
                check_length(&key, self.max_key_len)?;
                let removed = self.table.remove(&key)?;
                writeln!(out, "removed {}", removed)?;
            }
            Command::Print => writeln!(out, "{}", self.table)?,
            other => return Err(unsupported(&other)),
        }
        Ok(())
    }

    fn summary(&self) -> String {
        self.table.to_string()
    }
}

/// Drives an [`IntList`]
#[derive(Debug, Default)]
pub struct ListDriver {
    list: IntList,
}

impl Driver for ListDriver {
    fn name(&self) -> &'static str {
        "list"
    }

    fn usage(&self) -> &'static str {
        "add <int>...  find <int>  remove <int>  print  quit"
    }

    fn execute(&mut self, command: Command, out: &mut dyn Write) -> ShellResult<()> {
        match command {
            Command::Add(values) => {
                for value in values {
                    self.list.insert(parse_int(&value)?)?;
                }
                writeln!(out, "{}", self.list)?;
            }
            Command::Find(value) => {
                let value = parse_int(&value)?;
                match self.list.find(&value)? {
                    Some(_) => writeln!(out, "found {}", value)?,
                    None => writeln!(out, "There is no entry containing {}", value)?,
                }
            }
            Command::Remove(value) => {
                let value = parse_int(&value)?;
                match self.list.find(&value)? {
                    Some(node) => {
                        self.list.remove(node)?;
                        writeln!(out, "removed {}", value)?;
                    }
                    None => writeln!(out, "There is no entry containing {}", value)?,
                }
            }
            Command::Print => writeln!(out, "{}", self.list)?,
            other => return Err(unsupported(&other)),
        }
        Ok(())
    }

    fn summary(&self) -> String {
        self.list.to_string()
    }
}

/// Drives a [`Stack`] of integers
#[derive(Debug, Default)]
pub struct StackDriver {
    stack: Stack<i32>,
}

impl Driver for StackDriver {
    fn name(&self) -> &'static str {
        "stack"
    }

    fn usage(&self) -> &'static str {
        "push <int>...  pop  peek  print  quit"
    }

    fn execute(&mut self, command: Command, out: &mut dyn Write) -> ShellResult<()> {
        match command {
            Command::Add(values) => {
                for value in values {
                    self.stack.push(parse_int(&value)?)?;
                }
                writeln!(out, "{}", self.stack)?;
            }
            Command::Take => match self.stack.pop() {
                Some(value) => writeln!(out, "popped {}", value)?,
                None => writeln!(out, "No values to pop from stack.")?,
            },
            Command::Peek => match self.stack.peek() {
                Some(value) => writeln!(out, "{}", value)?,
                None => writeln!(out, "Empty stack.")?,
            },
            Command::Print => writeln!(out, "{}", self.stack)?,
            other => return Err(unsupported(&other)),
        }
        Ok(())
    }

    fn summary(&self) -> String {
        self.stack.to_string()
    }
}

/// Drives a [`Queue`] of integers
#[derive(Debug, Default)]
pub struct QueueDriver {
    queue: Queue<i32>,
}

impl Driver for QueueDriver {
    fn name(&self) -> &'static str {
        "queue"
    }

    fn usage(&self) -> &'static str {
        "enqueue <int>...  dequeue  peek  print  quit"
    }

    fn execute(&mut self, command: Command, out: &mut dyn Write) -> ShellResult<()> {
        match command {
            Command::Add(values) => {
                for value in values {
                    self.queue.enqueue(parse_int(&value)?)?;
                }
                writeln!(out, "{}", self.queue)?;
            }
            Command::Take => match self.queue.dequeue() {
                Some(value) => writeln!(out, "dequeued {}", value)?,
                None => writeln!(out, "No values to dequeue from queue.")?,
            },
            Command::Peek => match self.queue.peek() {
                Some(value) => writeln!(out, "{}", value)?,
                None => writeln!(out, "Empty queue.")?,
            },
            Command::Print => writeln!(out, "{}", self.queue)?,
            other => return Err(unsupported(&other)),
        }
        Ok(())
    }

    fn summary(&self) -> String {
        self.queue.to_string()
    }
}

/// Drives a [`Trie`]
#[derive(Debug)]
pub struct TrieDriver {
    trie: Trie,
    max_key_len: usize,
}

impl TrieDriver {
    pub fn new(config: &Config) -> Self {
        Self {
            trie: Trie::new(),
            max_key_len: config.max_key_len,
        }
    }

    fn listing(&self) -> String {
        if self.trie.is_empty() {
            return "Empty trie.".to_string();
        }
        self.trie.words().join(" ")
    }
}

impl Driver for TrieDriver {
    fn name(&self) -> &'static str {
        "trie"
    }

    fn usage(&self) -> &'static str {
        "add <word>...  find <word>  remove <word>  print  quit"
    }

    fn execute(&mut self, command: Command, out: &mut dyn Write) -> ShellResult<()> {
        match command {
            Command::Add(words) => {
                for word in words {
                    check_length(&word, self.max_key_len)?;
                    if self.trie.insert(&word)? {
                        writeln!(out, "added {}", word)?;
                    } else {
                        writeln!(out, "{} is already present", word)?;
                    }
                }
            }
            Command::Find(word) => {
                check_length(&word, self.max_key_len)?;
                if self.trie.contains(&word) {
                    writeln!(out, "found {}", word)?;
                } else {
                    writeln!(out, "Can't find {} in trie.", word)?;
                }
            }
            Command::Remove(word) => {
                check_length(&word, self.max_key_len)?;
                self.trie.remove(&word)?;
                writeln!(out, "removed {}", word)?;
            }
            Command::Print => writeln!(out, "{}", self.listing())?,
            other => return Err(unsupported(&other)),
        }
        Ok(())
    }

    fn summary(&self) -> String {
        self.listing()
    }
}
