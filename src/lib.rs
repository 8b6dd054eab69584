//! Adjugate Codegen
//!
//! A tiny code generator that prints the symbolic cofactor formulas for the
//! adjugate of a generic 3x3 matrix, formatted as a nested list-of-lists
//! literal. The block is meant to be pasted into a matrix `inverse` method
//! that divides the adjugate by the determinant (`adj(M) / det(M)`); the
//! generated text refers to the matrix as `self` and its determinant as `d`.
//!
//! # Quick Start
//!
//! ```rust
//! use adjugate_codegen::codegen::render_adjugate;
//!
//! let block = render_adjugate();
//! assert_eq!(block.matches("/ d").count(), 9);
//! ```

// Core domain types
pub mod core;

// Formula rendering and block emission
pub mod codegen;
