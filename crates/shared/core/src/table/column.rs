use serde::{Deserialize, Serialize};

use super::Cell;

/// Semantic type of a built column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Datetime,
    Identifier,
    /// Unclassified pass-through column, cells keep their source type
    Other,
}

/// Named, typed column of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Column with `len` missing cells
    pub fn missing(name: impl Into<String>, kind: ColumnKind, len: usize) -> Self {
        Self::new(name, kind, vec![Cell::Missing; len])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is the missing marker
    pub fn is_all_missing(&self) -> bool {
        self.cells.iter().all(Cell::is_missing)
    }
}
