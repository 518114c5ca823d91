//! Console logging for the card.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Routes `tracing` events at `INFO` and above to the browser console.
///
/// Runs once, from the wasm start hook.
pub fn init() {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(Level::INFO)
        .set_report_logs_in_timings(false)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
