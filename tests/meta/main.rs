//! Structural checks on the test tree

mod coverage;
