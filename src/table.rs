pub mod frame;
pub mod reader;
pub mod synthetic;

pub use frame::{Column, ColumnSummary, Table};
