mod writer;

use std::io::Write;

use crate::grid::Grid;
use crate::Result;

/// Serialize a grid to canonical table text.
///
/// Each row becomes `| v1 | v2 |`; a header row is followed by
/// `| --- | --- |` sized to the grid's column count. Lines are joined with
/// `\n` and there is no trailing newline. An empty grid yields `""`.
///
/// A grid without columns has no separator to write: its rows print as
/// `||`, which read back as blank lines, so such a grid parses back empty.
///
/// # Examples
/// ```
/// use pipegrid::{Grid, Row};
///
/// let grid = Grid::from_rows(vec![
///     Row::from_values(["A", "B"], true),
///     Row::from_values(["1", "2"], false),
/// ]);
/// assert_eq!(pipegrid::to_string(&grid), "| A | B |\n| --- | --- |\n| 1 | 2 |");
/// ```
pub fn to_string(grid: &Grid) -> String {
    let mut writer = writer::Writer::with_capacity(estimate_len(grid));
    for row in grid.rows() {
        writer.write_row(row.values());
        if row.is_head() && grid.column_count() > 0 {
            writer.write_separator(grid.column_count());
        }
    }
    writer.finish()
}

pub fn to_vec(grid: &Grid) -> Vec<u8> {
    to_string(grid).into_bytes()
}

pub fn to_writer<W: Write>(mut writer: W, grid: &Grid) -> Result<()> {
    writer.write_all(to_string(grid).as_bytes())?;
    Ok(())
}

fn estimate_len(grid: &Grid) -> usize {
    let cells: usize = grid
        .rows()
        .iter()
        .flat_map(|row| row.values())
        .map(|value| value.len() + 3)
        .sum();
    let lines = grid.row_count() + grid.rows().iter().filter(|row| row.is_head()).count();
    cells + lines * 2
}
