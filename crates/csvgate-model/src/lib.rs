pub mod error;
pub mod finding;

pub use error::{CsvGateError, Result};
pub use finding::{ErrorKind, Finding, Location, TypeRecord, ValidationOutcome};
