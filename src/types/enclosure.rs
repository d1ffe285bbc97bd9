use std::fmt;

use serde::{Deserialize, Serialize};

/// Paired or symmetric context inside which `|` does not split cells.
///
/// # Examples
/// ```
/// use pipegrid::Enclosure;
///
/// let enclosure = Enclosure::from_opener('[');
/// assert_eq!(enclosure, Some(Enclosure::Bracket));
/// assert_eq!(Enclosure::Bracket.closer(), ']');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Enclosure {
    Bracket,
    Paren,
    Brace,
    Backtick,
    SingleQuote,
    DoubleQuote,
}

impl Enclosure {
    pub fn opener(self) -> char {
        match self {
            Enclosure::Bracket => '[',
            Enclosure::Paren => '(',
            Enclosure::Brace => '{',
            Enclosure::Backtick => '`',
            Enclosure::SingleQuote => '\'',
            Enclosure::DoubleQuote => '"',
        }
    }

    pub fn closer(self) -> char {
        match self {
            Enclosure::Bracket => ']',
            Enclosure::Paren => ')',
            Enclosure::Brace => '}',
            other => other.opener(),
        }
    }

    pub fn from_opener(c: char) -> Option<Self> {
        match c {
            '[' => Some(Enclosure::Bracket),
            '(' => Some(Enclosure::Paren),
            '{' => Some(Enclosure::Brace),
            '`' => Some(Enclosure::Backtick),
            '\'' => Some(Enclosure::SingleQuote),
            '"' => Some(Enclosure::DoubleQuote),
            _ => None,
        }
    }
}

impl fmt::Display for Enclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.opener(), self.closer())
    }
}
