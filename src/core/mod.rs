//! Core domain types for the adjugate grid
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod cell;

pub use cell::{Cell, CellError, MinorIndices, ORDER};
