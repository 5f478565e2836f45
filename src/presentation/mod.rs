//! JavaScript-facing bindings.

pub mod wasm_api;

pub use wasm_api::PagedChartApi;
