//! Formula rendering and block emission

mod emitter;
mod formula;

pub use emitter::{render_adjugate, write_adjugate};
pub use formula::{DET_VAR, Formula, MATRIX_VAR, adjugate_formulas};
