//! CSV record writer.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::message::MessageRecord;

/// Flat row for one record.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRecord<'a> {
    date: String,
    sender: String,
    message: &'a str,
    year: i32,
    only_date: String,
    day_name: &'static str,
    month_num: u32,
    month: &'static str,
    day: u32,
    hour: u32,
    minute: u32,
    period: String,
}

impl<'a> CsvRecord<'a> {
    fn from_record(record: &'a MessageRecord) -> Self {
        Self {
            date: record.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
            sender: record.sender().to_string(),
            message: record.text(),
            year: record.year(),
            only_date: record.date().format("%Y-%m-%d").to_string(),
            day_name: record.day_name(),
            month_num: record.month(),
            month: record.month_name(),
            day: record.day(),
            hour: record.hour(),
            minute: record.minute(),
            period: record.hour_bucket().label(),
        }
    }
}

fn write_rows<W: Write>(records: &[MessageRecord], sink: W) -> Result<W> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);
    for record in records {
        writer.serialize(CsvRecord::from_record(record))?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| io::Error::other(e.to_string()).into())
}

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Sender`, `Message`, `Year`, `OnlyDate`, `DayName`,
///   `MonthNum`, `Month`, `Day`, `Hour`, `Minute`, `Period`
/// - Notifications appear with the sender `group_notification`
/// - Encoding: UTF-8
pub fn write_records_csv(records: &[MessageRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(records, file)?;
    Ok(())
}

/// Converts records to a CSV string in the same format as
/// [`write_records_csv`].
pub fn records_to_csv(records: &[MessageRecord]) -> Result<String> {
    let bytes = write_rows(records, Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}
