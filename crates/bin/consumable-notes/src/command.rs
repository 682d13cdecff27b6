//! Line commands understood by the prompt.
//!
//! ```text
//! add <name> [x<qty>] [| <notes>]
//! rm <id>            del <id>
//! + <id>             inc <id>
//! - <id>             dec <id>
//! adj <id> <delta>
//! ls                 list
//! json
//! help
//! quit               exit
//! ```
//!
//! Everything after the first `|` of an `add` line is the note, kept as
//! typed apart from the single space after the bar. A literal `\n` in the
//! note starts a new line.

use std::num::ParseIntError;

use consumables_domain::id::ItemId;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an item. An empty name is passed through for the store to reject.
    Add {
        name: String,
        notes: String,
        quantity: Option<i64>,
    },
    Remove(ItemId),
    Adjust {
        id: ItemId,
        delta: i64,
    },
    List,
    Json,
    Help,
    Quit,
}

/// Reasons an input line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help` for a list)")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{input}` is not a valid item id")]
    InvalidId {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("`{input}` is not a whole number")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unexpected `{0}` after command")]
    TrailingInput(String),
}

impl Command {
    /// Parse one line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing what was wrong with the line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }
        let (word, raw_rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = raw_rest.trim();

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => parse_add(raw_rest)?,
            "rm" | "del" => Self::Remove(parse_id("rm", rest)?),
            "+" | "inc" => Self::Adjust {
                id: parse_id("inc", rest)?,
                delta: 1,
            },
            "-" | "dec" => Self::Adjust {
                id: parse_id("dec", rest)?,
                delta: -1,
            },
            "adj" => parse_adjust(rest)?,
            "ls" | "list" => no_args(Self::List, rest)?,
            "json" => no_args(Self::Json, rest)?,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }

    /// Whether running this command can change the list.
    #[must_use]
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Remove(_) | Self::Adjust { .. }
        )
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let (head, notes) = match rest.split_once('|') {
        Some((head, notes)) => (head, notes.strip_prefix(' ').unwrap_or(notes)),
        None => (rest, ""),
    };
    let head = head.trim();
    let (name, quantity) = match head.rsplit_once(char::is_whitespace) {
        Some((name, last)) => match quantity_token(last) {
            Some(raw) => (name.trim_end(), Some(parse_number(raw)?)),
            None => (head, None),
        },
        None => (head, None),
    };
    Ok(Command::Add {
        name: name.to_string(),
        notes: notes.replace("\\n", "\n"),
        quantity,
    })
}

/// `x3`, `X12`, `x-1`: the number after the `x`, if the token looks like one.
fn quantity_token(token: &str) -> Option<&str> {
    let raw = token.strip_prefix(['x', 'X'])?;
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(raw)
}

fn parse_adjust(rest: &str) -> Result<Command, CommandError> {
    let mut args = rest.split_whitespace();
    let id = parse_id("adj", args.next().unwrap_or_default())?;
    let delta = args.next().ok_or(CommandError::MissingArgument {
        command: "adj",
        argument: "a delta such as 2 or -1",
    })?;
    let delta = parse_number(delta)?;
    if let Some(extra) = args.next() {
        return Err(CommandError::TrailingInput(extra.to_string()));
    }
    Ok(Command::Adjust { id, delta })
}

fn parse_id(command: &'static str, raw: &str) -> Result<ItemId, CommandError> {
    let raw = raw.trim().trim_start_matches('#');
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "an item id",
        });
    }
    raw.parse().map_err(|source| CommandError::InvalidId {
        input: raw.to_string(),
        source,
    })
}

fn parse_number(raw: &str) -> Result<i64, CommandError> {
    raw.parse().map_err(|source| CommandError::InvalidNumber {
        input: raw.to_string(),
        source,
    })
}

fn no_args(command: Command, rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::TrailingInput(rest.to_string()))
    }
}
