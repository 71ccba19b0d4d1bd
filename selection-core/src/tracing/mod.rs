//! Observability for selection.
//! `tracing` crate with `EnvFilter`, configured through `SELECTION_LOG`.

pub mod setup;

pub use setup::init_tracing;
