//! Post-processing passes over the token sequence

pub mod case;
pub mod simplify;

pub use case::{apply_case, CaseStyle};
pub use simplify::simplify;
