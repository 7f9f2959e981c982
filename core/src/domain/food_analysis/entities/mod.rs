pub mod analysis_outcome;

pub use analysis_outcome::*;
