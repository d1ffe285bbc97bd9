//! Rectangular table model.
//!
//! Every public operation leaves the grid rectangular (each row holds
//! exactly `column_count` cells) with row and cell positions matching
//! their sequence indices.

mod edit;
mod mutation;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

pub use edit::Edit;

use crate::text::escape::{decode_cell, encode_cell};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: SmolStr,
    #[serde(default)]
    position: usize,
    /// Index of the owning row.
    #[serde(default)]
    row: usize,
}

impl Cell {
    pub(crate) fn new(value: impl Into<SmolStr>) -> Self {
        Self {
            value: value.into(),
            position: 0,
            row: 0,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(SmolStr::default())
    }

    /// Stored (escaped) value, exactly as it appears in table text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value with line breaks and backticks restored, for editing.
    pub fn text(&self) -> Cow<'_, str> {
        decode_cell(&self.value)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
    #[serde(default)]
    head: bool,
    #[serde(default)]
    position: usize,
}

impl Row {
    /// Row of stored values. Positions are assigned once the row joins a grid.
    pub fn from_values<I>(values: I, head: bool) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        Self {
            cells: values.into_iter().map(Cell::new).collect(),
            head,
            position: 0,
        }
    }

    pub(crate) fn blank(columns: usize) -> Self {
        let mut row = Self::from_values(std::iter::empty::<SmolStr>(), false);
        row.pad_to(columns);
        row
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.iter().map(Cell::value)
    }

    pub fn is_head(&self) -> bool {
        self.head
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn pad_to(&mut self, columns: usize) {
        if self.cells.len() < columns {
            self.cells.resize_with(columns, Cell::empty);
        }
    }
}

/// Deserialized form; converted through [`Grid::from_rows`] so the
/// invariants hold regardless of the counts found in the source.
#[derive(Deserialize)]
struct GridSnapshot {
    rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GridSnapshot")]
pub struct Grid {
    rows: Vec<Row>,
    row_count: usize,
    column_count: usize,
}

impl From<GridSnapshot> for Grid {
    fn from(snapshot: GridSnapshot) -> Self {
        Grid::from_rows(snapshot.rows)
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid of `rows` rows by `columns` columns, every cell empty.
    pub fn with_size(columns: usize, rows: usize) -> Self {
        let rows = (0..rows).map(|_| Row::blank(columns)).collect();
        let mut grid = Self {
            rows,
            row_count: 0,
            column_count: columns,
        };
        grid.reindex();
        grid
    }

    /// Grid from possibly ragged rows. Short rows are padded with empty
    /// cells up to the widest row.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let column_count = rows.iter().map(Row::len).max().unwrap_or(0);
        let mut grid = Self {
            rows,
            row_count: 0,
            column_count,
        };
        grid.pad_rows();
        grid.reindex();
        grid
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|row| row.cell(column))
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decoded text of a cell, ready for an editor.
    pub fn cell_text(&self, row: usize, column: usize) -> Result<Cow<'_, str>> {
        self.check_cell(row, column)?;
        Ok(self.rows[row].cells[column].text())
    }

    /// Encode `text` and store it in a cell. Returns whether the stored
    /// value changed.
    pub fn set_cell_text(&mut self, row: usize, column: usize, text: &str) -> Result<bool> {
        self.check_cell(row, column)?;
        let encoded = encode_cell(text);
        let cell = &mut self.rows[row].cells[column];
        if *cell.value == *encoded {
            return Ok(false);
        }
        cell.value = SmolStr::new(encoded);
        Ok(true)
    }

    /// Stored values row by row.
    pub fn to_values(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.values().map(str::to_string).collect())
            .collect()
    }

    /// Restore positions, back-references, and counts after a structural
    /// change.
    ///
    /// The column count is the widest row. A grid without rows keeps its
    /// column count so columns added before any row are not lost.
    pub fn reindex(&mut self) {
        for (row_index, row) in self.rows.iter_mut().enumerate() {
            row.position = row_index;
            for (cell_index, cell) in row.cells.iter_mut().enumerate() {
                cell.position = cell_index;
                cell.row = row_index;
            }
        }
        if let Some(widest) = self.rows.iter().map(Row::len).max() {
            self.column_count = widest;
        }
        self.row_count = self.rows.len();
    }

    fn pad_rows(&mut self) {
        let columns = self.column_count;
        for (index, row) in self.rows.iter_mut().enumerate() {
            if row.len() < columns {
                tracing::trace!(row = index, from = row.len(), to = columns, "padding row");
            }
            row.pad_to(columns);
        }
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(Error::row_out_of_range(index, self.rows.len()));
        }
        Ok(())
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index >= self.column_count {
            return Err(Error::column_out_of_range(index, self.column_count));
        }
        Ok(())
    }

    fn check_cell(&self, row: usize, column: usize) -> Result<()> {
        self.check_row(row)?;
        self.check_column(column)
    }
}
