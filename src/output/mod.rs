//! Report output: CSV file and console lines

pub mod csv_writer;
pub mod formatter;
pub mod report;

pub use csv_writer::{save_csv, write_csv};
pub use formatter::ConsoleFormatter;
pub use report::{RankedEntry, RankedReport};
