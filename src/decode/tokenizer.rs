use std::iter::Peekable;
use std::str::CharIndices;

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::constants::{BACKTICK, ESCAPE, PIPE};
use crate::types::Enclosure;

/// Cells of one tokenized line. Most tables are narrow enough to stay inline.
pub type Tokens = SmallVec<[SmolStr; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Plain,
    Enclosed(Enclosure),
    /// Inside a code span opened by a run of this many backticks.
    Code(usize),
}

/// Split one line into trimmed cell strings on `|`.
///
/// A `|` inside `[...]`, `(...)`, `{...}`, a code span, or a quoted run is
/// ordinary text. Only one context is tracked at a time: while inside one,
/// other openers are plain characters. A code span opened by `n` backticks
/// closes only at the next run of exactly `n` backticks, so a double
/// backtick span may carry single literal backticks. Outside any context a
/// `|` or backtick right after a backslash is literal; any run of
/// backslashes counts, so encoded cell values never open a code span.
/// Closers are never escaped. An unterminated context runs to the end of
/// the line.
///
/// Empty segments (`||`) produce no cell; whitespace-only segments produce
/// an empty cell.
///
/// # Examples
/// ```
/// use pipegrid::tokenize_line;
///
/// assert_eq!(tokenize_line("a | b | c").as_slice(), ["a", "b", "c"]);
/// assert_eq!(tokenize_line("a | `b|c` | d").as_slice(), ["a", "`b|c`", "d"]);
/// ```
pub fn tokenize_line(line: &str) -> Tokens {
    let mut tokens = Tokens::new();
    let mut scope = Scope::Plain;
    let mut start = 0;
    let mut chars = line.char_indices().peekable();
    let mut escaped = false;

    while let Some((idx, ch)) = chars.next() {
        match scope {
            Scope::Plain if escaped && (ch == PIPE || ch == BACKTICK) => {}
            Scope::Plain if ch == PIPE => {
                push_segment(&mut tokens, &line[start..idx]);
                start = idx + ch.len_utf8();
            }
            Scope::Plain => {
                scope = match Enclosure::from_opener(ch) {
                    Some(Enclosure::Backtick) => Scope::Code(1 + consume_backticks(&mut chars)),
                    Some(enclosure) => Scope::Enclosed(enclosure),
                    None => Scope::Plain,
                };
            }
            Scope::Enclosed(enclosure) => {
                if ch == enclosure.closer() {
                    scope = Scope::Plain;
                }
            }
            Scope::Code(run) => {
                if ch == BACKTICK && 1 + consume_backticks(&mut chars) == run {
                    scope = Scope::Plain;
                }
            }
        }
        escaped = ch == ESCAPE;
    }
    push_segment(&mut tokens, &line[start..]);

    match scope {
        Scope::Plain => {}
        Scope::Enclosed(enclosure) => {
            tracing::trace!(context = %enclosure, "unterminated context runs to end of line");
        }
        Scope::Code(run) => {
            tracing::trace!(run, "unterminated code span runs to end of line");
        }
    }

    tokens
}

/// Whether the tokens form a header separator row (`| --- | --- |`).
///
/// A line without tokens (a blank line inside the block) also counts.
pub fn is_separator_row(tokens: &[SmolStr]) -> bool {
    tokens
        .iter()
        .all(|token| crate::constants::is_separator_token(token))
}

fn push_segment(tokens: &mut Tokens, segment: &str) {
    if !segment.is_empty() {
        tokens.push(SmolStr::new(segment.trim()));
    }
}

fn consume_backticks(chars: &mut Peekable<CharIndices<'_>>) -> usize {
    let mut count = 0;
    while chars.next_if(|&(_, ch)| ch == BACKTICK).is_some() {
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(line: &str) -> Vec<String> {
        tokenize_line(line).iter().map(|t| t.to_string()).collect()
    }

    #[rstest]
    #[case("a | b | c", &["a", "b", "c"])]
    #[case("| a | b |", &["a", "b"])]
    #[case("|a|b|", &["a", "b"])]
    #[case("| a |  | b |", &["a", "", "b"])]
    #[case("||a||", &["a"])]
    #[case("single", &["single"])]
    #[case("", &[])]
    #[case("   ", &[""])]
    fn test_plain_splitting(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(tokens(line), expected);
    }

    #[rstest]
    #[case("a | `b|c` | d", &["a", "`b|c`", "d"])]
    #[case("| [x|y] | z |", &["[x|y]", "z"])]
    #[case("| (x|y) | z |", &["(x|y)", "z"])]
    #[case("| {x|y} | z |", &["{x|y}", "z"])]
    #[case("| 'x|y' | z |", &["'x|y'", "z"])]
    #[case("| \"x|y\" | z |", &["\"x|y\"", "z"])]
    fn test_enclosures_protect_pipes(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(tokens(line), expected);
    }

    #[rstest]
    fn test_contexts_do_not_nest() {
        // `(` inside brackets is plain text, so `]` closes the context.
        assert_eq!(tokens("| [a(b] | c) |"), ["[a(b]", "c)"]);
        // quote inside parens does not open a second context.
        assert_eq!(tokens("| (it's|x) | y |"), ["(it's|x)", "y"]);
    }

    #[rstest]
    fn test_double_backtick_span_keeps_single_backticks() {
        assert_eq!(tokens("| ``a ` b|c`` | d |"), ["``a ` b|c``", "d"]);
        assert_eq!(tokens("| `` | x |"), ["`` | x |"]);
    }

    #[rstest]
    fn test_unterminated_context_swallows_rest_of_line() {
        assert_eq!(tokens("| a | [b | c |"), ["a", "[b | c |"]);
        assert_eq!(tokens("| a | `b | c |"), ["a", "`b | c |"]);
    }

    #[rstest]
    fn test_backslash_escapes() {
        assert_eq!(tokens("| a\\|b | c |"), ["a\\|b", "c"]);
        assert_eq!(tokens("| a\\`b | c |"), ["a\\`b", "c"]);
        // closers are never escaped
        assert_eq!(tokens("| [a\\]|b] | c |"), ["[a\\]", "b]", "c"]);
    }

    #[rstest]
    #[case("| dir\\\\`x | b |", &["dir\\\\`x", "b"])]
    #[case("| dir\\\\\\`x | b |", &["dir\\\\\\`x", "b"])]
    #[case("| \\\\\\` | b |", &["\\\\\\`", "b"])]
    #[case("| a\\`\\`b | c |", &["a\\`\\`b", "c"])]
    fn test_backslash_runs_before_backtick(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(tokens(line), expected);
    }

    #[rstest]
    fn test_escaped_backtick_is_not_part_of_the_next_run() {
        assert_eq!(tokens("| \\``a|b` | c |"), ["\\``a|b`", "c"]);
    }

    #[rstest]
    fn test_multibyte_content() {
        assert_eq!(tokens("| 日本 | ü|ö |"), ["日本", "ü", "ö"]);
    }

    #[rstest]
    #[case(&["---", "-"], true)]
    #[case(&["---", "a"], false)]
    #[case(&[":---:"], false)]
    #[case(&[], true)]
    fn test_is_separator_row(#[case] cells: &[&str], #[case] expected: bool) {
        let tokens: Tokens = cells.iter().map(|c| SmolStr::new(c)).collect();
        assert_eq!(is_separator_row(&tokens), expected);
    }
}
