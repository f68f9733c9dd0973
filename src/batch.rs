//! Batch conversion of accounts read from CSV.
//!
//! Input files carry a header row with the columns `branch_code` and
//! `account_number`; an empty `branch_code` means the clearing code is part
//! of the account number.

use crate::converter::Converter;
use crate::error::{Error, Result};
use crate::reference_table::ReferenceTable;
use crate::types::ConversionResult;
use csv::{ReaderBuilder, Trim, Writer};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::str::FromStr;

/// Output formats for conversion results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `bank_code account_number` line per conversion.
    Text,
    /// CSV with clearing code, serial number, bank code and account number.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

/// One raw conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub branch_code: Option<String>,
    pub account_number: String,
}

/// CSV output record.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    branch_code: Option<&'a str>,
    account_number: Option<&'a str>,
    swift_bank_code: Option<&'a str>,
    swift_account_number: &'a str,
}

impl<'a> From<&'a ConversionResult> for CsvRow<'a> {
    fn from(result: &'a ConversionResult) -> Self {
        CsvRow {
            branch_code: result.branch_code(),
            account_number: result.account_number(),
            swift_bank_code: result.swift_bank_code(),
            swift_account_number: result.swift_account_number(),
        }
    }
}

/// Counts of converted rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub resolved: usize,
    pub unresolved: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.resolved + self.unresolved
    }
}

enum ResultWriter<W: Write> {
    Text(W),
    Csv(Writer<W>),
}

impl<W: Write> ResultWriter<W> {
    fn new(writer: W, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ResultWriter::Text(writer),
            OutputFormat::Csv => ResultWriter::Csv(Writer::from_writer(writer)),
        }
    }

    fn write(&mut self, result: &ConversionResult) -> Result<()> {
        match self {
            ResultWriter::Text(writer) => {
                writeln!(
                    writer,
                    "{} {}",
                    result.swift_bank_code().unwrap_or("-"),
                    result.swift_account_number()
                )?;
            }
            ResultWriter::Csv(writer) => writer.serialize(CsvRow::from(result))?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            ResultWriter::Text(writer) => writer.flush()?,
            ResultWriter::Csv(writer) => writer.flush()?,
        }
        Ok(())
    }
}

/// Convert every request and write the results in `format`.
///
/// Stops at the first request whose clearing prefix is not numeric,
/// reporting its 1-based position.
pub fn convert_requests<I, W>(
    table: &ReferenceTable,
    requests: I,
    writer: &mut W,
    format: OutputFormat,
) -> Result<BatchSummary>
where
    I: IntoIterator<Item = Result<ConversionRequest>>,
    W: Write,
{
    let mut output = ResultWriter::new(writer, format);
    let mut summary = BatchSummary::default();

    for (idx, request) in requests.into_iter().enumerate() {
        let row = idx + 1;
        let at_row = |source: Error| Error::Row {
            row,
            source: Box::new(source),
        };

        let request = request.map_err(at_row)?;
        let result = Converter::new(
            table,
            request.branch_code.as_deref(),
            Some(&request.account_number),
        )
        .convert()
        .map_err(at_row)?;

        if result.is_resolved() {
            summary.resolved += 1;
        } else {
            summary.unresolved += 1;
        }
        output.write(&result)?;
    }

    output.flush()?;
    log::info!(
        "Converted {} accounts ({} unresolved)",
        summary.total(),
        summary.unresolved
    );
    Ok(summary)
}

/// Read requests from CSV and convert them.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use ypbank_swift::batch::{convert_batch, OutputFormat};
/// use ypbank_swift::ReferenceTable;
///
/// let mut input = File::open("accounts.csv")?;
/// let mut output = File::create("swift.csv")?;
/// convert_batch(ReferenceTable::builtin(), &mut input, &mut output, OutputFormat::Csv)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_batch<R: Read, W: Write>(
    table: &ReferenceTable,
    reader: &mut R,
    writer: &mut W,
    format: OutputFormat,
) -> Result<BatchSummary> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let requests = csv_reader
        .deserialize::<ConversionRequest>()
        .map(|record| record.map_err(Error::from));

    convert_requests(table, requests, writer, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_convert_batch_csv() {
        let input = "branch_code,account_number\n,5001-1234567\n3300,850101-1234\n,2600-1234567\n";
        let mut output = Vec::new();

        let summary = convert_batch(
            ReferenceTable::builtin(),
            &mut input.as_bytes(),
            &mut output,
            OutputFormat::Csv,
        )
        .unwrap();

        assert_eq!(summary, BatchSummary { resolved: 2, unresolved: 1 });
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "branch_code,account_number,swift_bank_code,swift_account_number\n\
             5001,1234567,500,00000050011234567\n\
             3300,8501011234,300,00000008501011234\n\
             ,,,00000026001234567\n"
        );
    }

    #[test]
    fn test_convert_batch_text() {
        let input = "branch_code,account_number\n,6789-123456789\n,0999-1\n";
        let mut output = Vec::new();

        convert_batch(
            ReferenceTable::builtin(),
            &mut input.as_bytes(),
            &mut output,
            OutputFormat::Text,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "600 00000000123456789\n- 00000000000009991\n"
        );
    }

    #[test]
    fn test_convert_batch_reports_row() {
        let input = "branch_code,account_number\n,5001-1234567\nXX00,1234567\n";
        let mut output = Vec::new();

        let err = convert_batch(
            ReferenceTable::builtin(),
            &mut input.as_bytes(),
            &mut output,
            OutputFormat::Text,
        )
        .unwrap_err();

        match err {
            Error::Row { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, Error::InvalidClearingNumber(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
