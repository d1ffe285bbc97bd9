use super::{Cell, Grid, Row};
use crate::{Error, Result};

/// Structural edits. Each validates its index first, so a rejected call
/// leaves the grid untouched, and ends with a reindex.
impl Grid {
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        self.rows.remove(index);
        tracing::debug!(index, "removed row");
        self.reindex();
        Ok(())
    }

    pub fn remove_column(&mut self, index: usize) -> Result<()> {
        self.check_column(index)?;
        for row in &mut self.rows {
            row.cells.remove(index);
        }
        self.column_count -= 1;
        tracing::debug!(index, "removed column");
        self.reindex();
        Ok(())
    }

    /// Insert an empty column so that it ends up at `index`.
    pub fn insert_column_left(&mut self, index: usize) -> Result<()> {
        if index > self.column_count {
            return Err(Error::column_out_of_range(index, self.column_count));
        }
        self.insert_column_at(index);
        Ok(())
    }

    pub fn insert_column_right(&mut self, index: usize) -> Result<()> {
        self.check_column(index)?;
        self.insert_column_at(index + 1);
        Ok(())
    }

    /// Insert an empty row so that it ends up at `index`.
    pub fn insert_row_above(&mut self, index: usize) -> Result<()> {
        if index > self.rows.len() {
            return Err(Error::row_out_of_range(index, self.rows.len()));
        }
        self.insert_row_at(index);
        Ok(())
    }

    pub fn insert_row_below(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        self.insert_row_at(index + 1);
        Ok(())
    }

    pub fn append_column(&mut self) {
        self.insert_column_at(self.column_count);
    }

    pub fn append_row(&mut self) {
        self.insert_row_at(self.rows.len());
    }

    /// Flip the header flag of a row.
    pub fn toggle_header(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        let row = &mut self.rows[index];
        row.head = !row.head;
        tracing::debug!(index, head = row.head, "toggled header");
        self.reindex();
        Ok(())
    }

    fn insert_column_at(&mut self, index: usize) {
        for row in &mut self.rows {
            row.cells.insert(index, Cell::empty());
        }
        self.column_count += 1;
        tracing::debug!(index, "inserted column");
        self.reindex();
    }

    fn insert_row_at(&mut self, index: usize) {
        self.rows.insert(index, Row::blank(self.column_count));
        tracing::debug!(index, "inserted row");
        self.reindex();
    }
}
