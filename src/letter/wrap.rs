//! Two-line wrapping for duty titles that are too long for the subject line.

use std::fmt;

use crate::error::{Result, ToolError};

/// Character budget for a duty title on the subject line.
pub const DEFAULT_WRAP_WIDTH: usize = 28;

/// Indent placed before the continuation line so it sits under the title.
pub const CONTINUATION_INDENT: &str = "          ";

/// A duty title laid out either on one line or across two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrappedTitle {
    Single(String),
    Split { first: String, second: String },
}

impl WrappedTitle {
    pub fn is_split(&self) -> bool {
        matches!(self, WrappedTitle::Split { .. })
    }

    /// The title's lines without the continuation indent.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            WrappedTitle::Single(line) => vec![line.as_str()],
            WrappedTitle::Split { first, second } => vec![first.as_str(), second.as_str()],
        }
    }

    /// Upper-cases every line while keeping the layout decided on the
    /// original spelling.
    pub fn to_uppercase(&self) -> Self {
        match self {
            WrappedTitle::Single(line) => WrappedTitle::Single(line.to_uppercase()),
            WrappedTitle::Split { first, second } => WrappedTitle::Split {
                first: first.to_uppercase(),
                second: second.to_uppercase(),
            },
        }
    }
}

impl fmt::Display for WrappedTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrappedTitle::Single(line) => f.write_str(line),
            WrappedTitle::Split { first, second } => {
                write!(f, "{first}\n{CONTINUATION_INDENT}{second}")
            }
        }
    }
}

/// Wraps `title` when it is `width` characters or longer.
///
/// The first word always opens line one. Further words join it while the
/// line stays strictly under `width`; everything after the first word that
/// does not fit goes to line two. When nothing is left for line two the title
/// is kept on a single line.
pub fn wrap_title(title: &str, width: usize) -> Result<WrappedTitle> {
    if title.chars().count() < width {
        return Ok(WrappedTitle::Single(title.to_string()));
    }

    let mut words = title.split_whitespace().peekable();
    let Some(head) = words.next() else {
        return Err(ToolError::Wrapper("duty title is blank".into()));
    };

    let mut first = head.to_string();
    let mut first_len = first.chars().count();
    while let Some(next) = words.peek() {
        let next_len = next.chars().count();
        if first_len + next_len + 1 >= width {
            break;
        }
        first.push(' ');
        first.push_str(next);
        first_len += next_len + 1;
        words.next();
    }

    let rest: Vec<&str> = words.collect();
    if rest.is_empty() {
        return Ok(WrappedTitle::Single(title.to_string()));
    }

    Ok(WrappedTitle::Split {
        first,
        second: rest.join(" "),
    })
}
