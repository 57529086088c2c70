//! Risk module
//!
//! Position sizing from the alert's sizing mode and account equity

mod sizing;

pub use sizing::PositionSizer;
