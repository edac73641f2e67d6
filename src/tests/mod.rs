//! In-crate test suite
//!
//! One file per concern, with shared fixtures and collaborator doubles in
//! `test_utils`.


mod sequence_tests;
