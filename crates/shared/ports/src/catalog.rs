use tickframe_core::MarketLimits;

/// Port for market metadata lookup.
///
/// The external exchange client supplies per-market precision and bounds;
/// the core only reads them. Implementations may be backed by a loaded
/// markets table, a cache, or a fixture in tests.
pub trait MarketCatalog: Send + Sync {
    /// Limits for a market symbol, if the venue reports any
    fn limits(&self, symbol: &str) -> Option<MarketLimits>;

    /// The catalog's name/identifier for debugging
    fn name(&self) -> &str {
        "MarketCatalog"
    }
}
