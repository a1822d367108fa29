//! Integration tests for Flowboard - full gesture sequences against the
//! editor, the way the render collaborator drives it.

mod connection_tests;
mod drop_tests;
