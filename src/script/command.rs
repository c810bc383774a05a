//! Command parsing.
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.

use std::fmt;
use std::str::FromStr;

use crate::error::script::ScriptError;

/// A single table operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `insert <key>`
    Insert(String),
    /// `find <key>`
    Find(String),
    /// `remove <key>`
    Remove(String),
    /// `undo`
    Undo,
    /// `size`
    Size,
    /// `capacity`
    Capacity,
    /// `clear`
    Clear,
    /// `dump`
    Dump,
}

/// Command names without their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Insert,
    Find,
    Remove,
    Undo,
    Size,
    Capacity,
    Clear,
    Dump,
}

impl Verb {
    fn takes_key(self) -> bool {
        matches!(self, Verb::Insert | Verb::Find | Verb::Remove)
    }
}

impl FromStr for Verb {
    type Err = ();

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word.to_ascii_lowercase().as_str() {
            "insert" => Ok(Verb::Insert),
            "find" => Ok(Verb::Find),
            "remove" => Ok(Verb::Remove),
            "undo" => Ok(Verb::Undo),
            "size" => Ok(Verb::Size),
            "capacity" => Ok(Verb::Capacity),
            "clear" => Ok(Verb::Clear),
            "dump" => Ok(Verb::Dump),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Insert(key) => write!(f, "insert {key}"),
            Command::Find(key) => write!(f, "find {key}"),
            Command::Remove(key) => write!(f, "remove {key}"),
            Command::Undo => f.write_str("undo"),
            Command::Size => f.write_str("size"),
            Command::Capacity => f.write_str("capacity"),
            Command::Clear => f.write_str("clear"),
            Command::Dump => f.write_str("dump"),
        }
    }
}

/// Parses one script line.
///
/// # Arguments
///
/// * `line_number` - 1-based line number, used in errors.
/// * `line` - The raw line.
///
/// # Returns
///
/// `Ok(None)` for blank and comment lines.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let verb: Verb = word.parse().map_err(|_| ScriptError::UnknownCommand {
        line: line_number,
        command: word.to_string(),
    })?;

    let key = if verb.takes_key() {
        let key = words.next().ok_or_else(|| ScriptError::MissingKey {
            line: line_number,
            command: word.to_string(),
        })?;
        Some(key.to_string())
    } else {
        None
    };

    if let Some(extra) = words.next() {
        return Err(ScriptError::UnexpectedArgument {
            line: line_number,
            command: word.to_string(),
            argument: extra.to_string(),
        });
    }

    let command = match (verb, key) {
        (Verb::Insert, Some(key)) => Command::Insert(key),
        (Verb::Find, Some(key)) => Command::Find(key),
        (Verb::Remove, Some(key)) => Command::Remove(key),
        (Verb::Undo, _) => Command::Undo,
        (Verb::Size, _) => Command::Size,
        (Verb::Capacity, _) => Command::Capacity,
        (Verb::Clear, _) => Command::Clear,
        (Verb::Dump, _) => Command::Dump,
        (_, None) => {
            return Err(ScriptError::MissingKey {
                line: line_number,
                command: word.to_string(),
            })
        }
    };
    Ok(Some(command))
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("insert apple" => Some(Command::Insert("apple".to_string())))]
    #[test_case("  FIND   apple  " => Some(Command::Find("apple".to_string())); "case and spacing")]
    #[test_case("remove apple" => Some(Command::Remove("apple".to_string())))]
    #[test_case("undo" => Some(Command::Undo))]
    #[test_case("size" => Some(Command::Size))]
    #[test_case("capacity" => Some(Command::Capacity))]
    #[test_case("clear" => Some(Command::Clear))]
    #[test_case("dump" => Some(Command::Dump))]
    #[test_case("" => None; "blank")]
    #[test_case("# insert apple" => None; "comment")]
    fn test_parse_line(line: &str) -> Option<Command> {
        parse_line(1, line).unwrap()
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line(3, "push x"),
            Err(ScriptError::UnknownCommand { line: 3, command: "push".to_string() })
        );
        assert_eq!(
            parse_line(4, "insert"),
            Err(ScriptError::MissingKey { line: 4, command: "insert".to_string() })
        );
        assert_eq!(
            parse_line(5, "undo now"),
            Err(ScriptError::UnexpectedArgument {
                line: 5,
                command: "undo".to_string(),
                argument: "now".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_script_reports_line_numbers() {
        let source = "insert a\n\n# comment\nfind a\nbogus\n";
        let err = parse_script(source).unwrap_err();
        assert_eq!(err, ScriptError::UnknownCommand { line: 5, command: "bogus".to_string() });

        let commands = parse_script("insert a\nfind a\nundo\n").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Insert("a".to_string()),
                Command::Find("a".to_string()),
                Command::Undo,
            ]
        );
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let command = Command::Remove("pear".to_string());
        assert_eq!(parse_line(1, &command.to_string()).unwrap(), Some(command));
    }
}
