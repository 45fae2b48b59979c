use tickframe_core::{Cell, Column, Table};

use crate::build::TableBuilder;

impl TableBuilder {
    /// Left-join a trades table onto an orders table by order identifier.
    ///
    /// Trade columns are appended with a `trade_` prefix so they cannot
    /// collide with order columns. Orders without a matching trade keep
    /// missing cells; no order row is ever dropped. With several trades per
    /// order the first match (trades-table row order) wins.
    pub fn attach_trades(&self, orders: &Table, trades: &Table) -> Table {
        let order_key = self.config().join_order_column.as_str();
        let trade_key = self.config().join_trade_column.as_str();

        let (Some(order_ids), Some(trade_ids)) =
            (orders.column(order_key), trades.column(trade_key))
        else {
            // Nothing to join on; orders pass through unchanged
            return orders.clone();
        };

        // Row index of the first trade per order id
        let matches: Vec<Option<usize>> = order_ids
            .cells
            .iter()
            .map(|order_id| {
                if order_id.is_missing() {
                    return None;
                }
                trade_ids.cells.iter().position(|trade_id| trade_id == order_id)
            })
            .collect();

        let mut joined = orders.clone();
        for column in trades.columns() {
            if column.name == trade_key {
                continue;
            }
            let cells: Vec<Cell> = matches
                .iter()
                .map(|m| match m {
                    Some(row) => column.cells[*row].clone(),
                    None => Cell::Missing,
                })
                .collect();
            joined.push_column(Column::new(
                format!("trade_{}", column.name),
                column.kind,
                cells,
            ));
        }
        joined
    }
}
