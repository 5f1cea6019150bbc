//! Integration tests for gray8 crates.
//!
//! End-to-end pipelines that cross the core, ops and io crates: load,
//! process, save, reload.
