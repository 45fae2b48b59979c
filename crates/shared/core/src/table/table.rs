use serde::{Deserialize, Serialize};

use super::{Cell, Column, Record};

/// Ordered collection of named, typed columns, one row per input record.
///
/// Transient in-memory structure: tables are returned to the caller and never
/// persisted by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Table with no rows and no columns
    pub fn empty() -> Self {
        Self { columns: Vec::new() }
    }

    /// Build from columns. All columns must have the same length.
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "column length mismatch"
        );
        Self { columns }
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Append a column. Must match the current row count (or be the first).
    pub fn push_column(&mut self, column: Column) {
        debug_assert!(
            self.columns.is_empty() || column.len() == self.n_rows(),
            "column length mismatch"
        );
        self.columns.push(column);
    }

    /// Cell at (row, column name), if both exist
    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        self.column(name).and_then(|c| c.cells.get(row))
    }

    /// Convert rows back into records for re-ingestion.
    ///
    /// Missing cells are omitted from the record so they re-enter as absent,
    /// keeping `build(to_records(..))` stable.
    pub fn to_records(&self) -> Vec<Record> {
        (0..self.n_rows())
            .map(|row| {
                let mut record = Record::new();
                for column in &self.columns {
                    if let Some(value) = column.cells[row].to_value() {
                        record.insert(column.name.clone(), value);
                    }
                }
                record
            })
            .collect()
    }

    /// Concatenate tables row-wise, merging partial schemas.
    ///
    /// The column set is the union over all inputs, ordered by first
    /// appearance; a column's kind comes from the first table that carries
    /// it. Rows from tables lacking a column are filled with the missing
    /// marker. Empty tables contribute nothing and never fail the merge.
    pub fn concat<I>(tables: I) -> Table
    where
        I: IntoIterator<Item = Table>,
    {
        let tables: Vec<Table> = tables.into_iter().filter(|t| !t.is_empty()).collect();
        if tables.is_empty() {
            return Table::empty();
        }

        let mut merged: Vec<Column> = Vec::new();
        for table in &tables {
            for column in &table.columns {
                if !merged.iter().any(|c| c.name == column.name) {
                    merged.push(Column::new(column.name.clone(), column.kind, Vec::new()));
                }
            }
        }

        for table in &tables {
            let rows = table.n_rows();
            for out in &mut merged {
                match table.column(&out.name) {
                    Some(column) => out.cells.extend(column.cells.iter().cloned()),
                    None => out.cells.extend(std::iter::repeat_n(Cell::Missing, rows)),
                }
            }
        }

        Table::new(merged)
    }
}
