mod compact;
mod parser;
mod scan;
mod tokenizer;

use std::io::Read;

pub use compact::{parse_size, CompactSize};
pub use tokenizer::{is_separator_row, tokenize_line, Tokens};

use crate::grid::Grid;
use crate::{ParseOptions, Result};

pub fn from_str(input: &str, options: &ParseOptions) -> Grid {
    parser::parse_table(input, options)
}

pub fn from_slice(input: &[u8], options: &ParseOptions) -> Result<Grid> {
    let text = std::str::from_utf8(input)?;
    Ok(from_str(text, options))
}

pub fn from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Grid> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(from_str(&buf, options))
}
