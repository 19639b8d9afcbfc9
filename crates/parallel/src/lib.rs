//! # Clusterpolate Parallel
//!
//! Execution strategies for grid evaluation.
//!
//! This crate provides:
//! - `ProcessingMode`: sequential / parallel / fixed worker count
//! - `ParallelStrategy`: dispatch over index ranges using Rayon

pub mod strategy;

pub use strategy::{num_cpus, ParallelStrategy, ProcessingMode};
