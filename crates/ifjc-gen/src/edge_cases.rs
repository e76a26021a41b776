//! Edge case tests for ifjc-gen.
