use log::debug;
use tickframe_core::{Cell, Column, ColumnKind, EntityKind, Record, Table};
use tickframe_schema::{FieldKind, MAX_FLATTEN_DEPTH, classify, flatten_record, registry};

use crate::coerce::coerce;

/// Table builder configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    /// Drop columns that are entirely missing across all rows.
    /// Turn off for schema-stability needs.
    pub dropna_fields: bool,
    /// Nested-object flattening depth
    pub flatten_depth: usize,
    /// Order-side key of the trades-to-orders join
    pub join_order_column: String,
    /// Trade-side key of the trades-to-orders join
    pub join_trade_column: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            dropna_fields: true,
            flatten_depth: MAX_FLATTEN_DEPTH,
            join_order_column: "id".to_string(),
            join_trade_column: "order_id".to_string(),
        }
    }
}

/// Builds canonical tables from raw exchange records.
///
/// Column names come out canonical regardless of the source casing
/// convention; values are typed per the entity kind's registry; rows keep
/// input order.
pub struct TableBuilder {
    config: FrameConfig,
}

impl TableBuilder {
    /// Builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: FrameConfig::default(),
        }
    }

    /// Builder with custom configuration
    pub fn with_config(config: FrameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Build a typed table from a sequence of records.
    ///
    /// Empty input yields an empty table, never an error. Column order is
    /// registry order first, then unrecognized pass-through fields in
    /// first-seen order.
    pub fn build(&self, records: &[Record], kind: EntityKind) -> Table {
        if records.is_empty() {
            return Table::empty();
        }

        let flats: Vec<Record> = records
            .iter()
            .map(|record| flatten_record(record, self.config.flatten_depth))
            .collect();

        // Registry columns present in at least one record, in registry order
        let mut fields: Vec<(String, FieldKind)> = registry(kind)
            .iter()
            .filter(|(name, _)| flats.iter().any(|flat| flat.contains_key(*name)))
            .map(|(name, field_kind)| (name.to_string(), *field_kind))
            .collect();

        // Then pass-through fields in first-seen order
        for flat in &flats {
            for key in flat.keys() {
                if !fields.iter().any(|(name, _)| name == key) {
                    fields.push((key.clone(), classify(kind, key)));
                }
            }
        }

        let mut columns: Vec<Column> = fields
            .into_iter()
            .map(|(name, field_kind)| {
                let cells = flats
                    .iter()
                    .map(|flat| match flat.get(&name) {
                        Some(value) => coerce(value, field_kind),
                        None => Cell::Missing,
                    })
                    .collect();
                Column::new(name, column_kind(field_kind), cells)
            })
            .collect();

        if self.config.dropna_fields {
            columns.retain(|column| !column.is_all_missing());
        }

        debug!(
            "built {kind} table: {} rows, {} columns",
            records.len(),
            columns.len()
        );
        Table::new(columns)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Column type a field classification produces
fn column_kind(kind: FieldKind) -> ColumnKind {
    match kind {
        FieldKind::Numeric => ColumnKind::Numeric,
        FieldKind::Boolean => ColumnKind::Boolean,
        FieldKind::Datetime => ColumnKind::Datetime,
        FieldKind::Identifier => ColumnKind::Identifier,
        FieldKind::Nested | FieldKind::Unknown => ColumnKind::Other,
    }
}
