//! Reference table of bank formatting rules.
//!
//! The table is an ordered list of [`BankFormat`] records. Lookups scan it
//! front to back and the first record whose clearing range contains the key
//! wins, so table order decides between overlapping ranges.

use crate::banks::SWEDISH_BANKS;
use crate::error::{Error, Result};
use crate::types::{BankFormat, ClearingRange};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use std::sync::OnceLock;

static BUILTIN: OnceLock<ReferenceTable> = OnceLock::new();

/// Raw bank format as supplied by a table provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankFormatRecord {
    pub bank_code: String,
    /// Inclusive `[first, last]` clearing numbers.
    pub clearing_range: [u32; 2],
    pub clearing_code_length: usize,
    pub serial_number_length: usize,
    pub zerofill_serial_number: bool,
    pub include_clearing_code: bool,
}

/// CSV row of a reference table file.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    bank_code: String,
    clearing_start: u32,
    clearing_end: u32,
    clearing_code_length: usize,
    serial_number_length: usize,
    zerofill_serial_number: bool,
    include_clearing_code: bool,
}

impl From<CsvRecord> for BankFormatRecord {
    fn from(record: CsvRecord) -> Self {
        BankFormatRecord {
            bank_code: record.bank_code,
            clearing_range: [record.clearing_start, record.clearing_end],
            clearing_code_length: record.clearing_code_length,
            serial_number_length: record.serial_number_length,
            zerofill_serial_number: record.zerofill_serial_number,
            include_clearing_code: record.include_clearing_code,
        }
    }
}

/// Immutable, ordered collection of bank formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    formats: Vec<BankFormat>,
}

impl ReferenceTable {
    /// Build a table from raw records, keeping their order.
    ///
    /// Fails with [`Error::InvalidRange`] when a record's first clearing
    /// number is greater than its last.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = BankFormatRecord>,
    {
        let formats = records
            .into_iter()
            .map(|record| {
                let [start, end] = record.clearing_range;
                if start > end {
                    return Err(Error::InvalidRange {
                        bank_code: record.bank_code,
                        start,
                        end,
                    });
                }
                Ok(BankFormat {
                    bank_code: record.bank_code,
                    clearing_range: ClearingRange::new_unchecked(start, end),
                    clearing_code_length: record.clearing_code_length,
                    serial_number_length: record.serial_number_length,
                    zerofill_serial_number: record.zerofill_serial_number,
                    include_clearing_code: record.include_clearing_code,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ReferenceTable { formats })
    }

    /// Load a table from CSV with a header row.
    ///
    /// Expected columns: `bank_code`, `clearing_start`, `clearing_end`,
    /// `clearing_code_length`, `serial_number_length`,
    /// `zerofill_serial_number`, `include_clearing_code`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use ypbank_swift::ReferenceTable;
    ///
    /// let mut file = File::open("banks.csv")?;
    /// let table = ReferenceTable::from_read(&mut file)?;
    /// println!("{} bank formats", table.len());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: CsvRecord = result?;
            records.push(BankFormatRecord::from(record));
        }

        let table = Self::from_records(records)?;
        log::info!("Loaded {} bank formats", table.len());
        Ok(table)
    }

    /// The Swedish reference table shipped with the crate.
    pub fn builtin() -> &'static ReferenceTable {
        BUILTIN.get_or_init(|| {
            let formats = SWEDISH_BANKS
                .iter()
                .map(|&(bank_code, start, end, clearing_len, serial_len, zerofill, include)| {
                    BankFormat {
                        bank_code: bank_code.to_string(),
                        clearing_range: ClearingRange::new_unchecked(start, end),
                        clearing_code_length: clearing_len,
                        serial_number_length: serial_len,
                        zerofill_serial_number: zerofill,
                        include_clearing_code: include,
                    }
                })
                .collect();
            ReferenceTable { formats }
        })
    }

    /// First bank format whose clearing range contains `key`.
    pub fn lookup(&self, key: u32) -> Option<&BankFormat> {
        let found = self.formats.iter().find(|f| f.clearing_range.contains(key));
        match found {
            Some(format) => log::debug!(
                "Clearing number {} resolved to bank {} ({})",
                key,
                format.bank_code,
                format.clearing_range
            ),
            None => log::debug!("Clearing number {} matches no bank", key),
        }
        found
    }

    /// All bank formats registered under `bank_code`, in table order.
    pub fn candidates<'a>(&'a self, bank_code: &'a str) -> impl Iterator<Item = &'a BankFormat> + 'a {
        self.formats.iter().filter(move |f| f.bank_code == bank_code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BankFormat> {
        self.formats.iter()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReferenceTable {
    type Item = &'a BankFormat;
    type IntoIter = std::slice::Iter<'a, BankFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(bank_code: &str, start: u32, end: u32) -> BankFormatRecord {
        BankFormatRecord {
            bank_code: bank_code.into(),
            clearing_range: [start, end],
            clearing_code_length: 4,
            serial_number_length: 7,
            zerofill_serial_number: false,
            include_clearing_code: true,
        }
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let table = ReferenceTable::from_records(vec![
            record("902", 3400, 3409),
            record("300", 3400, 3999),
        ])
        .unwrap();

        assert_eq!(table.lookup(3405).unwrap().bank_code, "902");
        assert_eq!(table.lookup(3400).unwrap().bank_code, "902");
        assert_eq!(table.lookup(3410).unwrap().bank_code, "300");
        assert_eq!(table.lookup(3999).unwrap().bank_code, "300");
        assert!(table.lookup(4000).is_none());
        assert!(table.lookup(3399).is_none());
    }

    #[test]
    fn test_from_records_rejects_reversed_range() {
        let err = ReferenceTable::from_records(vec![record("500", 5999, 5000)]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRange { start: 5999, end: 5000, .. }
        ));
    }

    #[test]
    fn test_from_read_csv() {
        let data = "\
bank_code,clearing_start,clearing_end,clearing_code_length,serial_number_length,zerofill_serial_number,include_clearing_code
600, 6000, 6999, 4, 9, true, false
800,8000,8999,5,10,true,true
";
        let table = ReferenceTable::from_read(&mut data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);

        let handelsbanken = table.lookup(6789).unwrap();
        assert_eq!(
            handelsbanken,
            &BankFormat {
                bank_code: "600".into(),
                clearing_range: ClearingRange::new_unchecked(6000, 6999),
                clearing_code_length: 4,
                serial_number_length: 9,
                zerofill_serial_number: true,
                include_clearing_code: false,
            }
        );
        assert_eq!(table.lookup(8327).unwrap().clearing_code_length, 5);
    }

    #[test]
    fn test_from_read_invalid_bool() {
        let data = "\
bank_code,clearing_start,clearing_end,clearing_code_length,serial_number_length,zerofill_serial_number,include_clearing_code
600,6000,6999,4,9,yes,false
";
        let err = ReferenceTable::from_read(&mut data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::CsvError(_)));
    }

    #[test]
    fn test_candidates_keeps_table_order() {
        let table = ReferenceTable::from_records(vec![
            record("300", 1100, 1199),
            record("120", 1200, 1399),
            record("300", 1400, 2099),
        ])
        .unwrap();

        let starts: Vec<u32> = table
            .candidates("300")
            .map(|f| f.clearing_range.start())
            .collect();
        assert_eq!(starts, vec![1100, 1400]);
        assert_eq!(table.candidates("999").count(), 0);
    }

    #[test]
    fn test_builtin_table_is_well_formed() {
        let table = ReferenceTable::builtin();
        assert!(!table.is_empty());
        for format in table {
            assert!(format.clearing_range.start() <= format.clearing_range.end());
            assert!(format.clearing_range.end() <= 9999);
            assert!(format.clearing_code_length >= 4);
            assert!(format.serial_number_length > 0);
        }
        assert!(std::ptr::eq(table, ReferenceTable::builtin()));
    }

    #[test]
    fn test_builtin_exceptions_precede_broad_ranges() {
        let table = ReferenceTable::builtin();
        assert_eq!(table.lookup(3300).unwrap().serial_number_length, 10);
        assert_eq!(table.lookup(3782).unwrap().serial_number_length, 10);
        assert_eq!(table.lookup(3781).unwrap().serial_number_length, 7);
        assert_eq!(table.lookup(3401).unwrap().bank_code, "902");
        assert_eq!(table.lookup(3410).unwrap().bank_code, "300");
    }
}
