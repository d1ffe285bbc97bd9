//! Lossless codec between pipe-delimited table text and an editable grid.
//!
//! ```
//! let mut grid = pipegrid::from_str("| A | B |\n| --- | --- |\n| 1 | 2 |");
//! grid.append_row();
//! grid.set_cell_text(2, 0, "multi\nline")?;
//! assert_eq!(
//!     pipegrid::to_string(&grid),
//!     "| A | B |\n| --- | --- |\n| 1 | 2 |\n| multi<br line/>line |  |"
//! );
//! # Ok::<(), pipegrid::Error>(())
//! ```

pub mod canonical;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod fence;
pub mod grid;
pub mod options;
pub mod text;
pub mod types;

use std::io::{Read, Write};

pub use crate::canonical::{canonicalize, is_canonical};
pub use crate::decode::{tokenize_line, Tokens};
pub use crate::error::Error;
pub use crate::grid::{Cell, Edit, Grid, Row};
pub use crate::options::{FenceOptions, ParseOptions};
pub use crate::text::escape::{decode_cell, encode_cell};
pub use crate::types::Enclosure;

pub type Result<T> = std::result::Result<T, Error>;

/// Parse table text. Never fails: unparsable text yields an empty or
/// partial grid.
pub fn from_str(input: &str) -> Grid {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options(input: &str, options: &ParseOptions) -> Grid {
    decode::from_str(input, options)
}

pub fn from_slice(input: &[u8]) -> Result<Grid> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Grid> {
    decode::from_slice(input, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Grid> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<Grid> {
    decode::from_reader(reader, options)
}

pub fn to_string(grid: &Grid) -> String {
    encode::to_string(grid)
}

pub fn to_vec(grid: &Grid) -> Vec<u8> {
    encode::to_vec(grid)
}

pub fn to_writer<W: Write>(writer: W, grid: &Grid) -> Result<()> {
    encode::to_writer(writer, grid)
}
