mod render;
mod summary;
pub mod views;

pub use render::{ReportError, ReportFormat};
pub use summary::InterviewReport;
