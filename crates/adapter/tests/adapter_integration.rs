//! Full-flow integration: raw responses to tables, market limits to
//! validated orders, batched fetches to one aggregated table.

use rust_decimal_macros::dec;
use serde_json::json;
use tickframe_adapter::{
    AdapterConfig, BoundsPolicy, Cell, EntityKind, OrderParams, Record, ResponseAdapter, Side,
    StaticCatalog, Table, paginate, run_all_settled,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn records(value: serde_json::Value) -> Vec<Record> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

#[test]
fn markets_response_drives_order_preprocessing() {
    init_logging();

    // Markets response from the exchange collaborator
    let markets = records(json!([
        {
            "symbol": "UP/USDC",
            "tickSize": "0.01",
            "minOrderSize": "5",
            "active": true
        }
    ]));

    let adapter = ResponseAdapter::with_config(AdapterConfig {
        price_out_of_range: BoundsPolicy::Clip,
        volume_out_of_range: BoundsPolicy::Clip,
        ..AdapterConfig::default()
    });

    // The same response builds a typed table...
    let table = adapter.build_table(&markets, EntityKind::Market);
    assert_eq!(table.cell(0, "tick_size"), Some(&Cell::Number(0.01)));
    assert_eq!(table.cell(0, "active"), Some(&Cell::Bool(true)));

    // ...and feeds the catalog the gate validates against
    let catalog = StaticCatalog::from_market_records(&markets);
    let order = OrderParams::limit("UP/USDC", Side::Buy, dec!(2), dec!(0.512));
    let validated = adapter
        .preprocess_with_catalog(order, &catalog, None)
        .unwrap();

    // Price snapped to the tick, amount lifted to the market minimum
    assert_eq!(validated.price, Some(dec!(0.51)));
    assert_eq!(validated.amount, Some(dec!(5)));
}

#[test]
fn unknown_market_is_unbounded() {
    init_logging();
    let adapter = ResponseAdapter::new();
    let catalog = StaticCatalog::new();

    let order = OrderParams::limit("GONE/USDC", Side::Sell, dec!(0.000001), dec!(123456789));
    let validated = adapter
        .preprocess_with_catalog(order.clone(), &catalog, None)
        .unwrap();
    assert_eq!(validated.price, order.price);
    assert_eq!(validated.amount, order.amount);
}

#[tokio::test]
async fn gather_tables_propagates_first_failure_by_default() {
    init_logging();
    let adapter = ResponseAdapter::new();

    async fn fetch(index: usize) -> Result<Table, String> {
        if index == 1 {
            Err(format!("fetch {index} failed"))
        } else {
            Ok(tickframe_frame::build_table(
                &[json!({"currency": "USDC", "free": index})
                    .as_object()
                    .unwrap()
                    .clone()],
                EntityKind::Balance,
            ))
        }
    }

    let err = adapter
        .gather_tables((0..3).map(fetch).collect())
        .await
        .unwrap_err();
    assert_eq!(err, "fetch 1 failed");
}

#[tokio::test]
async fn gather_tables_captures_failures_when_requested() {
    init_logging();
    let adapter = ResponseAdapter::with_config(AdapterConfig {
        return_exceptions: true,
        max_parallel: 2,
        ..AdapterConfig::default()
    });

    async fn fetch(index: usize) -> Result<Table, String> {
        if index == 1 {
            Err(format!("fetch {index} failed"))
        } else {
            Ok(tickframe_frame::build_table(
                &[json!({"currency": "USDC", "free": index})
                    .as_object()
                    .unwrap()
                    .clone()],
                EntityKind::Balance,
            ))
        }
    }

    let table = adapter
        .gather_tables((0..3).map(fetch).collect())
        .await
        .unwrap();
    // The failing fetch is logged and skipped; the rest aggregate
    assert_eq!(table.n_rows(), 2);
}

#[tokio::test]
async fn settled_outcomes_keep_submission_order_under_serial_execution() {
    init_logging();

    async fn fetch(index: usize) -> Result<usize, String> {
        if index == 1 {
            Err("middle failed".to_string())
        } else {
            Ok(index * 10)
        }
    }

    let settled = run_all_settled((0..3).map(fetch), 1).await;
    assert_eq!(settled[0], Ok(0));
    assert_eq!(settled[1], Err("middle failed".to_string()));
    assert_eq!(settled[2], Ok(20));
}

#[tokio::test]
async fn paginated_markets_concatenate() {
    init_logging();

    let pages = vec![
        records(json!([{"symbol": "a"}, {"symbol": "b"}])),
        records(json!([{"symbol": "c"}])),
    ];

    let table = paginate(
        |_limit, offset| {
            let page = if offset == 0 {
                pages[0].clone()
            } else {
                pages[1].clone()
            };
            async move {
                Ok::<_, String>(tickframe_frame::build_table(&page, EntityKind::Market))
            }
        },
        2,
        None,
    )
    .await
    .unwrap();

    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.cell(2, "symbol"), Some(&Cell::Text("c".to_string())));
}
