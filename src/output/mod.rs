//! Output generation
//! Plain-text export, export warnings and formatted quality reports

pub mod formatter;
pub mod plain_text;
pub mod report;
pub mod warnings;

pub use plain_text::generate_plain_text;
pub use report::QualityReport;
pub use warnings::get_export_warnings;
