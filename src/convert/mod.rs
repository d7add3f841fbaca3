// Flat CSV projection of extracted records. Pure mappings, no heuristics.

pub mod flatten;
pub mod lead;

pub use flatten::profile_row;
pub use lead::lead_row;
