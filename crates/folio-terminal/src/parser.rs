//! Input line parsing.
//!
//! Splits on runs of whitespace. There is no quoting, escaping, variable
//! expansion or operator handling: every token after the first is passed
//! to the command verbatim.

/// A raw input line split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    /// First token exactly as typed. Empty for blank input.
    pub name: String,
    /// Remaining tokens, in order.
    pub args: Vec<String>,
}

impl ParsedLine {
    /// Whether the line was blank (nothing to dispatch).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Arguments as borrowed slices, the form commands receive.
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Parse a raw input line.
pub fn parse(raw: &str) -> ParsedLine {
    let mut tokens = raw.split_whitespace();
    let Some(name) = tokens.next() else {
        return ParsedLine::default();
    };
    ParsedLine {
        name: name.to_string(),
        args: tokens.map(str::to_string).collect(),
    }
}
