//! Conversion of domestic Swedish accounts into the international format.
//!
//! A [`Converter`] holds one cleaned request and borrows the reference table
//! used to resolve it. Conversion itself never validates lengths or digit
//! content: malformed input yields a deterministic, if meaningless, result.
//! Use the [`validation`](crate::validation) module for plausibility checks.
//!
//! International account numbers cannot be turned back into domestic ones
//! and must not be fed to the converter.
//!
//! # Examples
//!
//! ```
//! use ypbank_swift::{Converter, ReferenceTable};
//!
//! let converter = Converter::new(ReferenceTable::builtin(), None, Some("5001-123 45 67"));
//! let result = converter.convert()?;
//! assert_eq!(result.swift_bank_code(), Some("500"));
//! assert_eq!(result.swift_account_number(), "00000050011234567");
//! # Ok::<(), ypbank_swift::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::reference_table::ReferenceTable;
use crate::types::{
    zerofill, BankFormat, ClearingSource, ConversionResult, CLEARING_KEY_LENGTH,
    SWIFT_ACCOUNT_LENGTH,
};

/// Remove hyphens, periods and whitespace from a raw field.
///
/// Absent input stays absent. Every other character is passed through.
pub fn clean_field(raw: Option<&str>) -> Option<String> {
    raw.map(|value| {
        value
            .chars()
            .filter(|c| *c != '-' && *c != '.' && !c.is_whitespace())
            .collect()
    })
}

/// Leading `len` characters of `s`, or all of it when shorter.
fn head(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// `s` without its leading `len` characters.
fn tail(s: &str, len: usize) -> &str {
    &s[head(s, len).len()..]
}

/// One conversion request against a reference table.
#[derive(Debug, Clone)]
pub struct Converter<'t> {
    table: &'t ReferenceTable,
    branch_code: Option<String>,
    account_number: Option<String>,
}

impl<'t> Converter<'t> {
    /// Create a converter from raw, uncleaned input.
    pub fn new(
        table: &'t ReferenceTable,
        branch_code: Option<&str>,
        account_number: Option<&str>,
    ) -> Self {
        Converter {
            table,
            branch_code: clean_field(branch_code),
            account_number: clean_field(account_number),
        }
    }

    /// Cleaned branch code, if one was supplied.
    pub fn branch_code(&self) -> Option<&str> {
        self.branch_code.as_deref()
    }

    /// Cleaned account number, if one was supplied.
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn clearing_source(&self) -> ClearingSource<'_> {
        match self.branch_code.as_deref() {
            Some(branch_code) => ClearingSource::Explicit(branch_code),
            None => ClearingSource::Derived,
        }
    }

    /// Numeric key used to look up the owning bank.
    ///
    /// Taken from the first four characters of the branch code, or of the
    /// account number when no branch code was given.
    pub fn lookup_key(&self) -> Result<u32> {
        let field = match self.clearing_source() {
            ClearingSource::Explicit(branch_code) => branch_code,
            ClearingSource::Derived => self.required_account_number()?,
        };
        let prefix = head(field, CLEARING_KEY_LENGTH);
        prefix
            .parse::<u32>()
            .map_err(|_| Error::InvalidClearingNumber(prefix.to_string()))
    }

    /// Bank format owning this account, if any.
    pub fn bank_format(&self) -> Result<Option<&'t BankFormat>> {
        let key = self.lookup_key()?;
        Ok(self.table.lookup(key))
    }

    /// Convert the account into its international representation.
    ///
    /// Fails only when no account number was supplied or its clearing
    /// prefix is not numeric.
    pub fn convert(&self) -> Result<ConversionResult> {
        let account_number = self.required_account_number()?;

        let result = match self.bank_format()? {
            Some(format) => self.apply(format, account_number),
            None => {
                log::warn!(
                    "No bank format for account {}, padding as-is",
                    account_number
                );
                ConversionResult::Unresolved {
                    swift_account_number: zerofill(account_number, SWIFT_ACCOUNT_LENGTH),
                }
            }
        };

        Ok(result)
    }

    fn apply(&self, format: &BankFormat, account_number: &str) -> ConversionResult {
        let (clearing_code, serial_number) = match self.clearing_source() {
            ClearingSource::Explicit(branch_code) => (branch_code, account_number),
            ClearingSource::Derived => (
                head(account_number, format.clearing_code_length),
                tail(account_number, format.clearing_code_length),
            ),
        };

        let serial_number = if format.zerofill_serial_number {
            zerofill(serial_number, format.serial_number_length)
        } else {
            serial_number.to_string()
        };

        let swift_account_number = if format.include_clearing_code {
            zerofill(
                &format!("{}{}", clearing_code, serial_number),
                SWIFT_ACCOUNT_LENGTH,
            )
        } else {
            zerofill(&serial_number, SWIFT_ACCOUNT_LENGTH)
        };

        log::debug!(
            "Converted {} {} to {} {}",
            clearing_code,
            serial_number,
            format.bank_code,
            swift_account_number
        );

        ConversionResult::Resolved {
            branch_code: clearing_code.to_string(),
            account_number: serial_number,
            swift_bank_code: format.bank_code.clone(),
            swift_account_number,
        }
    }

    fn required_account_number(&self) -> Result<&str> {
        self.account_number
            .as_deref()
            .ok_or_else(|| Error::MissingField("account_number".to_string()))
    }
}

/// Convert one account against `table` in a single call.
pub fn convert(
    table: &ReferenceTable,
    branch_code: Option<&str>,
    account_number: &str,
) -> Result<ConversionResult> {
    Converter::new(table, branch_code, Some(account_number)).convert()
}
