//! Implementation of the classic algorithms.
//!
//! Each module holds one algorithm together with its error type and tests.

pub mod binary_search;
pub mod dijkstra;
pub mod fibonacci;
pub mod merge_sort;
