use std::str::FromStr;

use wordseek_core::Position;

/// A line of input in the interactive player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    /// Drag from `start` to `end`.
    Select { start: Position, end: Position },
    ShowGrid,
    ShowWords,
    Help,
    Quit,
}

struct Keyword {
    names: &'static [&'static str],
    command: Command,
}

const KEYWORDS: [Keyword; 4] = [
    Keyword {
        names: &["grid", "g"],
        command: Command::ShowGrid,
    },
    Keyword {
        names: &["words", "w"],
        command: Command::ShowWords,
    },
    Keyword {
        names: &["help", "h", "?"],
        command: Command::Help,
    },
    Keyword {
        names: &["quit", "q", "exit"],
        command: Command::Quit,
    },
];

pub const HELP: &str = "\
Commands:
  ROW,COL ROW,COL   select the line between two cells (e.g. `0,0 0,4`)
  grid, g           show the grid
  words, w          show the word list
  help, h           show this help
  quit, q           save and leave";

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    #[display("empty input")]
    Empty,
    #[display("unknown command {input:?}, type `help` for a list")]
    Unknown { input: String },
    #[display("invalid cell {text:?}, expected ROW,COL")]
    InvalidPosition { text: String },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseCommandError::Empty);
        }
        let lower = input.to_ascii_lowercase();
        if let Some(keyword) = KEYWORDS.iter().find(|k| k.names.contains(&lower.as_str())) {
            return Ok(keyword.command);
        }

        let parts = input.split_whitespace().collect::<Vec<_>>();
        let [start, end] = parts.as_slice() else {
            return Err(ParseCommandError::Unknown {
                input: input.to_owned(),
            });
        };
        Ok(Command::Select {
            start: parse_position(start)?,
            end: parse_position(end)?,
        })
    }
}

fn parse_position(text: &str) -> Result<Position, ParseCommandError> {
    let invalid = || ParseCommandError::InvalidPosition {
        text: text.to_owned(),
    };
    let (row, col) = text.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Position::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!("grid".parse(), Ok(Command::ShowGrid));
        assert_eq!(" W ".parse(), Ok(Command::ShowWords));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            "0,0 2,2".parse(),
            Ok(Command::Select {
                start: Position::new(0, 0),
                end: Position::new(2, 2)
            })
        );
        assert_eq!(
            "  9,3   9,0 ".parse(),
            Ok(Command::Select {
                start: Position::new(9, 3),
                end: Position::new(9, 0)
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(ParseCommandError::Unknown { .. })
        ));
        assert!(matches!(
            "0,0 0,0 0,0".parse::<Command>(),
            Err(ParseCommandError::Unknown { .. })
        ));
        assert_eq!(
            "0,0 x,1".parse::<Command>(),
            Err(ParseCommandError::InvalidPosition {
                text: "x,1".to_owned()
            })
        );
        assert_eq!(
            "0,0 -1,1".parse::<Command>(),
            Err(ParseCommandError::InvalidPosition {
                text: "-1,1".to_owned()
            })
        );
        assert_eq!(
            "00 1,1".parse::<Command>(),
            Err(ParseCommandError::InvalidPosition {
                text: "00".to_owned()
            })
        );
    }
}
