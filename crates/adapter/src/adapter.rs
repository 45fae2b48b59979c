use std::collections::HashMap;
use std::future::Future;

use log::warn;
use rust_decimal::Decimal;
use tickframe_core::{EntityKind, MarketLimits, OrderParams, Record, Table};
use tickframe_frame::{FrameConfig, TableBuilder};
use tickframe_gate::LimitGate;
use tickframe_ports::{GateConfig, GateResult, MarketCatalog, OrderGate};

use crate::config::AdapterConfig;

/// Builder function for one entity kind.
///
/// New kinds are added by registering a function, not by reflection or
/// inheritance.
pub type BuildFn = fn(&ResponseAdapter, &[Record], EntityKind) -> Table;

/// Adapts exchange responses to tables and preprocesses outgoing orders.
///
/// Dispatch is an explicit registry populated at construction: every entity
/// kind maps to a builder function, with order books routed to the ladder
/// builder.
pub struct ResponseAdapter {
    config: AdapterConfig,
    builder: TableBuilder,
    gate: LimitGate,
    registry: HashMap<EntityKind, BuildFn>,
}

impl ResponseAdapter {
    /// Adapter with the default configuration
    pub fn new() -> Self {
        Self::with_config(AdapterConfig::default())
    }

    /// Adapter with custom configuration
    pub fn with_config(config: AdapterConfig) -> Self {
        let builder = TableBuilder::with_config(FrameConfig {
            dropna_fields: config.dropna_fields,
            flatten_depth: config.flatten_depth,
            ..FrameConfig::default()
        });
        let gate = LimitGate::with_config(GateConfig {
            price_out_of_range: config.price_out_of_range,
            volume_out_of_range: config.volume_out_of_range,
        });

        let mut registry: HashMap<EntityKind, BuildFn> = HashMap::new();
        for kind in EntityKind::all() {
            registry.insert(*kind, build_records);
        }
        registry.insert(EntityKind::OrderBook, build_ladders);

        Self {
            config,
            builder,
            gate,
            registry,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn builder(&self) -> &TableBuilder {
        &self.builder
    }

    /// Register (or replace) the builder function for an entity kind
    pub fn register(&mut self, kind: EntityKind, build: BuildFn) {
        self.registry.insert(kind, build);
    }

    /// Build a typed table from raw records via the kind's registered builder
    pub fn build_table(&self, records: &[Record], kind: EntityKind) -> Table {
        match self.registry.get(&kind) {
            Some(build) => build(self, records, kind),
            // Every kind is registered at construction; an unregistered one
            // still builds generically rather than failing
            None => self.builder.build(records, kind),
        }
    }

    /// Build an orders table, joining trade columns when configured
    pub fn build_orders(&self, orders: &[Record], trades: &[Record]) -> Table {
        let orders = self.build_table(orders, EntityKind::Order);
        if !self.config.attach_trades_to_orders {
            return orders;
        }
        let trades = self.build_table(trades, EntityKind::Trade);
        self.builder.attach_trades(&orders, &trades)
    }

    /// Validate/clamp one order against market limits
    pub fn preprocess_order(
        &self,
        order: OrderParams,
        limits: &MarketLimits,
        reference_price: Option<Decimal>,
    ) -> GateResult<OrderParams> {
        self.gate.preprocess(order, limits, reference_price)
    }

    /// Validate/clamp a batch of orders against one market
    pub fn preprocess_orders(
        &self,
        orders: Vec<OrderParams>,
        limits: &MarketLimits,
        reference_price: Option<Decimal>,
    ) -> GateResult<Vec<OrderParams>> {
        self.gate.preprocess_batch(orders, limits, reference_price)
    }

    /// Validate/clamp one order, looking its limits up in a catalog.
    ///
    /// A market the catalog does not know is treated as fully unbounded.
    pub fn preprocess_with_catalog(
        &self,
        order: OrderParams,
        catalog: &dyn MarketCatalog,
        reference_price: Option<Decimal>,
    ) -> GateResult<OrderParams> {
        let limits = catalog.limits(&order.symbol).unwrap_or_default();
        self.gate.preprocess(order, &limits, reference_price)
    }

    /// Run fetch operations under the configured concurrency cap and
    /// concatenate their tables.
    ///
    /// With `return_exceptions` set, per-operation failures are logged and
    /// the successful tables still aggregate; otherwise the first failure by
    /// submission index propagates.
    pub async fn gather_tables<F, E>(&self, operations: Vec<F>) -> Result<Table, E>
    where
        F: Future<Output = Result<Table, E>>,
        E: std::fmt::Display,
    {
        if self.config.return_exceptions {
            let settled =
                tickframe_batch::run_all_settled(operations, self.config.max_parallel).await;
            let tables = settled
                .into_iter()
                .filter_map(|result| match result {
                    Ok(table) => Some(table),
                    Err(error) => {
                        warn!("batch operation failed: {error}");
                        None
                    }
                })
                .collect::<Vec<_>>();
            Ok(Table::concat(tables))
        } else {
            let tables = tickframe_batch::run_all(operations, self.config.max_parallel).await?;
            Ok(Table::concat(tables))
        }
    }
}

impl Default for ResponseAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn build_records(adapter: &ResponseAdapter, records: &[Record], kind: EntityKind) -> Table {
    adapter.builder.build(records, kind)
}

/// Order-book records are ladder containers; each one flattens to rows and
/// the rows concatenate
fn build_ladders(adapter: &ResponseAdapter, records: &[Record], _kind: EntityKind) -> Table {
    Table::concat(records.iter().map(|book| adapter.builder.build_order_book(book)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tickframe_core::Cell;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_registry_routes_order_books_to_ladder_builder() {
        let adapter = ResponseAdapter::new();
        let books = vec![
            record(json!({"bids": [["0.5", "10"]], "asks": [], "market": "a"})),
            record(json!({"bids": [], "asks": [["0.6", "4"]], "market": "b"})),
        ];

        let table = adapter.build_table(&books, EntityKind::OrderBook);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.cell(0, "side"), Some(&Cell::Text("bid".to_string())));
        assert_eq!(table.cell(1, "market"), Some(&Cell::Text("b".to_string())));
    }

    #[test]
    fn test_custom_builder_registration() {
        fn empty_builder(_: &ResponseAdapter, _: &[Record], _: EntityKind) -> Table {
            Table::empty()
        }

        let mut adapter = ResponseAdapter::new();
        adapter.register(EntityKind::Greek, empty_builder);

        let records = vec![record(json!({"symbol": "BTC-C", "delta": "0.4"}))];
        assert!(adapter.build_table(&records, EntityKind::Greek).is_empty());
        // Other kinds are untouched
        assert!(!adapter.build_table(&records, EntityKind::Ticker).is_empty());
    }

    #[test]
    fn test_attach_trades_is_opt_in() {
        let orders = vec![record(json!({"id": "o-1", "price": "0.5"}))];
        let trades = vec![record(json!({"id": "t-1", "order_id": "o-1", "price": "0.51"}))];

        let plain = ResponseAdapter::new().build_orders(&orders, &trades);
        assert!(plain.column("trade_price").is_none());

        let adapter = ResponseAdapter::with_config(AdapterConfig {
            attach_trades_to_orders: true,
            ..AdapterConfig::default()
        });
        let joined = adapter.build_orders(&orders, &trades);
        assert_eq!(joined.cell(0, "trade_price"), Some(&Cell::Number(0.51)));
    }
}
