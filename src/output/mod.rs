//! Output formatting for subnet reports.
//!
//! - [`terminal`] - fixed-width report lines
//! - [`banner`] - ASCII banner shown above the report

mod banner;
mod terminal;

pub use banner::banner;
pub use terminal::{format_field, format_report, LABEL_WIDTH};
