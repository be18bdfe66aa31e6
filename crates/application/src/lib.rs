//! DNS client application layer: transport port, resolution use case and
//! report rendering.
pub mod ports;
pub mod report;
pub mod use_cases;

pub use report::{format_record, Report};
