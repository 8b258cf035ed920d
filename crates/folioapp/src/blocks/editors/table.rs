//! Table grid editor.
//!
//! The grid is always rectangular with at least one row and one column.
//! Row and column removal refuse to go below that; cell edits rebuild the
//! whole grid from what the host's editable cells currently hold.

use crate::blocks::{BlockData, TableBlock};
use crate::error::{FolioError, Result};

#[derive(Debug, Clone)]
pub struct TableEditor {
    data: TableBlock,
}

impl TableEditor {
    pub fn new(mut data: TableBlock) -> Self {
        normalize(&mut data.rows);
        Self { data }
    }

    pub fn data(&self) -> &TableBlock {
        &self.data
    }

    pub fn row_count(&self) -> usize {
        self.data.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.data.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn add_row(&mut self) -> BlockData {
        let cols = self.column_count().max(1);
        self.data.rows.push(vec![String::new(); cols]);
        self.emit()
    }

    /// Remove row `index`; the last remaining row is kept.
    pub fn remove_row(&mut self, index: usize) -> BlockData {
        if self.data.rows.len() > 1 && index < self.data.rows.len() {
            self.data.rows.remove(index);
        }
        self.emit()
    }

    pub fn add_column(&mut self) -> BlockData {
        for row in &mut self.data.rows {
            row.push(String::new());
        }
        self.emit()
    }

    /// Remove the trailing column from every row; the last column is kept.
    pub fn remove_column(&mut self) -> BlockData {
        if self.column_count() > 1 {
            for row in &mut self.data.rows {
                row.pop();
            }
        }
        self.emit()
    }

    /// Replace the grid with the cell texts read back from the host surface.
    pub fn rebuild_from_cells(&mut self, cells: Vec<Vec<String>>) -> Result<BlockData> {
        let cols = cells.first().map(Vec::len).unwrap_or(0);
        if cols == 0 || cells.iter().any(|row| row.len() != cols) {
            return Err(FolioError::invalid("table cells must form a non-empty rectangle"));
        }
        self.data.rows = cells;
        Ok(self.emit())
    }

    /// Edit one cell by rebuilding from a copy of the current grid.
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) -> Result<BlockData> {
        let mut cells = self.data.rows.clone();
        let cell = cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| FolioError::invalid(format!("no cell at row {}, column {}", row, col)))?;
        *cell = text.to_string();
        self.rebuild_from_cells(cells)
    }

    pub fn sync(&mut self, mut data: TableBlock) {
        normalize(&mut data.rows);
        self.data = data;
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Table(self.data.clone())
    }
}

/// Pad ragged or empty grids coming from stored data.
fn normalize(rows: &mut Vec<Vec<String>>) {
    if rows.is_empty() {
        rows.push(Vec::new());
    }
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
    for row in rows.iter_mut() {
        row.resize(cols, String::new());
    }
}
