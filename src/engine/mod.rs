//! Session orchestration.

pub mod controller;

pub use controller::ScanController;
