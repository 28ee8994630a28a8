//! Shared state between threads and UI collaborators.

pub mod shared;

pub use shared::{create_shared_state, SharedScanState, SharedScanStateHandle};
