//! Dataset loading and the record store.

mod parser;
mod source;
mod store;

pub use parser::{parse_date, Parser, ParserConfig};
pub use source::{DataSource, DataTable, SourceMetadata, DEFAULT_DAILY_FILE, DEFAULT_HOURLY_FILE};
pub use store::RecordStore;
