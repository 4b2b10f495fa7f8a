pub mod config;
pub mod error;
pub mod extract;
pub mod report;
pub mod source;
pub mod tally;

pub use config::{Config, InputConfig, ReportConfig};
pub use error::{QtallyError, Result};
pub use extract::{extract, Labels, CATEGORY_PATTERN};
pub use report::render;
pub use source::SourceText;
pub use tally::{Tally, DEFAULT_THRESHOLD};
