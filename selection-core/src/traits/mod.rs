//! Seams shared across the crate.

pub mod cancellation;

pub use cancellation::{Cancellable, CancellationToken, NeverCancelled};
