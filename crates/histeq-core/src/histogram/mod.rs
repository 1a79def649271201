pub mod cumulative;
pub mod frequency;

pub use cumulative::CumulativeTable;
pub use frequency::{analyze, FrequencyTable};
