use serde::{Deserialize, Serialize};

use super::Grid;
use crate::Result;

/// A single change a front end can request on a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edit {
    RemoveRow(usize),
    RemoveColumn(usize),
    InsertColumnLeft(usize),
    InsertColumnRight(usize),
    InsertRowAbove(usize),
    InsertRowBelow(usize),
    AppendColumn,
    AppendRow,
    ToggleHeader(usize),
    /// Store editor text (unescaped) into a cell.
    SetCell {
        row: usize,
        column: usize,
        text: String,
    },
}

impl Grid {
    /// Apply an edit. Returns whether the grid changed; only a `SetCell`
    /// with an identical value reports `false`.
    pub fn apply(&mut self, edit: &Edit) -> Result<bool> {
        match edit {
            Edit::RemoveRow(index) => self.remove_row(*index)?,
            Edit::RemoveColumn(index) => self.remove_column(*index)?,
            Edit::InsertColumnLeft(index) => self.insert_column_left(*index)?,
            Edit::InsertColumnRight(index) => self.insert_column_right(*index)?,
            Edit::InsertRowAbove(index) => self.insert_row_above(*index)?,
            Edit::InsertRowBelow(index) => self.insert_row_below(*index)?,
            Edit::AppendColumn => self.append_column(),
            Edit::AppendRow => self.append_row(),
            Edit::ToggleHeader(index) => self.toggle_header(*index)?,
            Edit::SetCell { row, column, text } => {
                return self.set_cell_text(*row, *column, text);
            }
        }
        Ok(true)
    }

    /// Apply edits in order, stopping at the first failure.
    pub fn apply_all<'a>(&mut self, edits: impl IntoIterator<Item = &'a Edit>) -> Result<usize> {
        let mut changed = 0;
        for edit in edits {
            if self.apply(edit)? {
                changed += 1;
            }
        }
        Ok(changed)
    }
}
