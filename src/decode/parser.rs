use memchr::memchr;

use super::compact::parse_size;
use super::scan::{scan_lines, ScanLine};
use super::tokenizer::{is_separator_row, tokenize_line, Tokens};
use crate::grid::{Grid, Row};
use crate::ParseOptions;

pub(crate) fn parse_table(input: &str, options: &ParseOptions) -> Grid {
    let input = input.trim();
    if input.is_empty() {
        return Grid::new();
    }

    if options.compact_size && memchr(b'|', input.as_bytes()).is_none() {
        if let Some(grid) = parse_compact(input, options) {
            return grid;
        }
    }

    let lines = scan_lines(input);
    assemble(tokenize_lines(input, &lines))
}

fn parse_compact(input: &str, options: &ParseOptions) -> Option<Grid> {
    let size = parse_size(input)?;
    let within_limit = |cells: usize| options.max_compact_cells.map_or(true, |max| cells <= max);
    match size.cells() {
        Some(cells) if within_limit(cells) => {
            tracing::debug!(
                columns = size.columns,
                rows = size.rows,
                "building empty grid from size spec"
            );
            Some(Grid::with_size(size.columns, size.rows))
        }
        _ => {
            tracing::debug!(
                columns = size.columns,
                rows = size.rows,
                limit = ?options.max_compact_cells,
                "size spec exceeds cell limit, parsing as table text"
            );
            None
        }
    }
}

fn tokenize(input: &str, line: &ScanLine) -> Tokens {
    if line.is_blank {
        return Tokens::new();
    }
    tokenize_line(line.text(input))
}

#[cfg(not(feature = "parallel"))]
fn tokenize_lines<'a>(
    input: &'a str,
    lines: &'a [ScanLine],
) -> impl Iterator<Item = Tokens> + 'a {
    lines.iter().map(move |line| tokenize(input, line))
}

#[cfg(feature = "parallel")]
fn tokenize_lines(input: &str, lines: &[ScanLine]) -> impl Iterator<Item = Tokens> {
    use rayon::prelude::*;

    let tokenized: Vec<Tokens> = lines.par_iter().map(|line| tokenize(input, line)).collect();
    tokenized.into_iter()
}

/// Build rows from tokenized lines with one line of lookahead.
///
/// Separator lines are not materialized; the row right before one is a
/// header row. A blank line inside the block has no tokens and so counts
/// as a separator.
fn assemble(lines: impl Iterator<Item = Tokens>) -> Grid {
    let mut lines = lines.peekable();
    let mut rows = Vec::new();

    while let Some(tokens) = lines.next() {
        if is_separator_row(&tokens) {
            continue;
        }
        let head = matches!(lines.peek(), Some(next) if is_separator_row(next));
        if head {
            tracing::trace!(row = rows.len(), "header row");
        }
        rows.push(Row::from_values(tokens, head));
    }

    Grid::from_rows(rows)
}
