//! Shared numerical helpers.

mod matrix;

pub use matrix::{center_vector, design_matrix, is_constant};
