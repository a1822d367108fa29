//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: Single-component tests (geometry, board, payloads, snapshots)
//! - integration: Multi-step gesture and workflow tests

mod integration;
mod unit;
