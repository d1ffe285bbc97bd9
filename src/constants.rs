pub const PIPE: char = '|';

pub const BACKTICK: char = '`';

pub const ESCAPE: char = '\\';

/// Stored in place of a line break inside a cell value.
pub const LINE_BREAK_MARKER: &str = "<br line/>";

/// Stored in place of a literal backtick inside a cell value.
pub const ESCAPED_BACKTICK: &str = "\\`";

pub const SEPARATOR_FIELD: &str = "---";

pub const FENCE: &str = "```";

pub const DEFAULT_INFO_STRING: &str = "tb";

#[inline]
pub fn is_separator_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|byte| byte == b'-')
}
