//! Property-based tests for the visibility engine.
