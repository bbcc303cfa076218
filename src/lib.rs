pub mod config;
pub mod lines;
pub mod math;
pub mod report;

pub use lines::{count_file_lines, count_lines, data_line_count, processed_line_count};
pub use math::multiply;
pub use report::LineReport;
