//! Cross-backend tests for comparison trees.
//!
//! Every case here runs in both evaluation modes.

mod matrix_tests;
