use tickframe_ports::BoundsPolicy;
use tickframe_schema::MAX_FLATTEN_DEPTH;

/// Adapter-wide configuration, covering every recognized option.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    /// Drop all-missing columns from built tables
    pub dropna_fields: bool,
    /// Nested-object flattening depth
    pub flatten_depth: usize,
    /// Join trade columns onto built order tables
    pub attach_trades_to_orders: bool,
    /// Policy for prices violating market bounds
    pub price_out_of_range: BoundsPolicy,
    /// Policy for amounts/notionals violating market bounds
    pub volume_out_of_range: BoundsPolicy,
    /// Concurrency cap for batched fetch operations
    pub max_parallel: usize,
    /// Capture per-operation failures instead of propagating the first one
    pub return_exceptions: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            dropna_fields: true,
            flatten_depth: MAX_FLATTEN_DEPTH,
            attach_trades_to_orders: false,
            price_out_of_range: BoundsPolicy::Warn,
            volume_out_of_range: BoundsPolicy::Warn,
            max_parallel: 8,
            return_exceptions: false,
        }
    }
}
