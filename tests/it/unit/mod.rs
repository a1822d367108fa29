//! Unit tests for Flowboard.

mod geometry_tests;
