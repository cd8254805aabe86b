//! Line-oriented command interpreter over an ordered queue of strings
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//! Contents are single whitespace-free tokens.
//!
//! ```text
//! insert <content> [priority]     append <content> [priority]
//! remove                          peek [index]
//! len                             dump
//! delete <content> [priority]     update <old> <new> [fast]
//! limit <n>                       save <path>
//! load <path>
//! ```
//!
//! A failing command is reported and the interpreter moves on to the next line.

use crate::app::error::{AppError, AppResult};
use crate::app::snapshot::{load_snapshot, save_snapshot, Snapshot};
use crate::core::error_handling::log_error_with_context;
use crate::queue::{Element, OrderedQueue};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Insert { content: String, priority: f64 },
    Append { content: String, priority: f64 },
    Remove,
    Peek { index: usize },
    Len,
    Dump,
    Delete { content: String, priority: f64 },
    Update { old: f64, new: f64, fast: bool },
    Limit(i64),
    Save(PathBuf),
    Load(PathBuf),
}

impl Command {
    /// Parse one script line; `None` for blank lines and comments
    pub fn parse(line: &str) -> AppResult<Option<Command>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let args = &tokens[1..];
        let command = match tokens[0].to_ascii_lowercase().as_str() {
            "insert" | "append" | "delete" => {
                let (content, priority) = match args {
                    [content] => (content.to_string(), 0.0),
                    [content, priority] => (content.to_string(), parse_number(line, priority)?),
                    _ => return Err(AppError::command(line, "expected <content> [priority]")),
                };
                match tokens[0].to_ascii_lowercase().as_str() {
                    "insert" => Command::Insert { content, priority },
                    "append" => Command::Append { content, priority },
                    _ => Command::Delete { content, priority },
                }
            }
            "remove" => no_args(line, args, Command::Remove)?,
            "len" => no_args(line, args, Command::Len)?,
            "dump" => no_args(line, args, Command::Dump)?,
            "peek" => match args {
                [] => Command::Peek { index: 0 },
                [index] => Command::Peek {
                    index: index.parse().map_err(|_| {
                        AppError::command(line, format!("'{}' is not a valid index", index))
                    })?,
                },
                _ => return Err(AppError::command(line, "expected [index]")),
            },
            "update" => match args {
                [old, new] => Command::Update {
                    old: parse_number(line, old)?,
                    new: parse_number(line, new)?,
                    fast: false,
                },
                [old, new, mode] if mode.eq_ignore_ascii_case("fast") => Command::Update {
                    old: parse_number(line, old)?,
                    new: parse_number(line, new)?,
                    fast: true,
                },
                _ => return Err(AppError::command(line, "expected <old> <new> [fast]")),
            },
            "limit" => match args {
                [limit] => Command::Limit(limit.parse().map_err(|_| {
                    AppError::command(line, format!("'{}' is not a valid limit", limit))
                })?),
                _ => return Err(AppError::command(line, "expected <n>")),
            },
            "save" | "load" => match args {
                [path] if tokens[0].eq_ignore_ascii_case("save") => Command::Save(PathBuf::from(path)),
                [path] => Command::Load(PathBuf::from(path)),
                _ => return Err(AppError::command(line, "expected <path>")),
            },
            other => {
                return Err(AppError::command(
                    line,
                    format!("unknown command '{}'", other),
                ))
            }
        };
        Ok(Some(command))
    }
}

fn parse_number(line: &str, token: &str) -> AppResult<f64> {
    token
        .parse()
        .map_err(|_| AppError::command(line, format!("'{}' is not a valid priority", token)))
}

fn no_args(line: &str, args: &[&str], command: Command) -> AppResult<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(AppError::command(line, "takes no arguments"))
    }
}

pub struct Shell<W: Write> {
    queue: OrderedQueue<String>,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(queue: OrderedQueue<String>, out: W) -> Self {
        Self { queue, out }
    }

    pub fn queue(&self) -> &OrderedQueue<String> {
        &self.queue
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute every command read from `input`
    ///
    /// Returns the number of lines that failed to parse or execute.
    pub fn run<R: BufRead>(&mut self, input: R) -> AppResult<usize> {
        let mut failures = 0;
        for (number, line) in input.lines().enumerate() {
            let line = line.map_err(|e| AppError::io("<input>", e))?;
            let outcome = Command::parse(&line).and_then(|command| match command {
                Some(command) => self.execute(command),
                None => Ok(()),
            });
            if let Err(e) = outcome {
                failures += 1;
                log_error_with_context(&e, &format!("Line {}", number + 1));
            }
        }
        Ok(failures)
    }

    pub fn execute(&mut self, command: Command) -> AppResult<()> {
        log::trace!("executing {:?}", command);
        match command {
            Command::Insert { content, priority } => {
                self.queue.insert(Element::new(content, priority))?;
            }
            Command::Append { content, priority } => {
                self.queue.append(Element::new(content, priority));
            }
            Command::Remove => {
                let (content, priority) = self.queue.remove()?;
                self.emit(format_args!("{} {}", content, priority))?;
            }
            Command::Peek { index } => {
                let (priority, content) = self.queue.peek_elem_at_index(index)?;
                self.emit(format_args!("{} {}", content, priority))?;
            }
            Command::Len => {
                let len = self.queue.len();
                self.emit(format_args!("{}", len))?;
            }
            Command::Dump => {
                for content in self.queue.get_all_elements() {
                    self.emit(format_args!("{}", content))?;
                }
            }
            Command::Delete { content, priority } => {
                let deleted = self.queue.delete_elem(&Element::new(content, priority));
                self.emit(format_args!("deleted {}", deleted))?;
            }
            Command::Update { old, new, fast } => {
                let updated = self.queue.update_priority(old, new, fast);
                self.emit(format_args!("updated {}", updated))?;
            }
            Command::Limit(limit) => {
                self.queue.set_limit(limit)?;
            }
            Command::Save(path) => {
                let snapshot = Snapshot::capture(&self.queue);
                save_snapshot(&path, &snapshot)?;
                self.emit(format_args!("saved {}", snapshot.elements.len()))?;
            }
            Command::Load(path) => {
                self.queue = load_snapshot::<String>(&path)?.restore()?;
                let len = self.queue.len();
                self.emit(format_args!("loaded {} ({})", len, self.queue.discipline()))?;
            }
        }
        Ok(())
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) -> AppResult<()> {
        writeln!(self.out, "{}", args).map_err(|e| AppError::io("<output>", e))
    }
}
