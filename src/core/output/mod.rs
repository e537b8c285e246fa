//! Record export.
//!
//! - [`write_records_csv`] / [`records_to_csv`] - one CSV row per parsed
//!   record, derived calendar fields included (requires `csv-output`)
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> whatstat::Result<()> {
//! use whatstat::core::output::{records_to_csv, write_records_csv};
//! use whatstat::parser::parse;
//!
//! let records = parse("1/1/23, 10:00 am - Alice: hello\n")?;
//!
//! // Write to a file
//! write_records_csv(&records, "records.csv".as_ref())?;
//!
//! // Or get as a string
//! let csv_string = records_to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{records_to_csv, write_records_csv};
