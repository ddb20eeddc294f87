//! Macro utilities for building collections

pub mod collections;
