pub mod table;

pub use table::{RawTable, read_raw_table};
