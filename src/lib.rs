//! YP Bank SWIFT Library
//!
//! Converts Swedish domestic bank accounts into the international (SWIFT)
//! representation: a bank code plus a zero-padded 17-digit account number.
//!
//! # Features
//!
//! - Reference table of Swedish clearing-number blocks, built in or loaded from CSV
//! - Range-based bank resolution where the first matching block wins
//! - Per-bank formatting: clearing code length, serial length, zero-fill,
//!   clearing code embedding
//! - Plausibility checks for bank code / account number pairs
//! - Batch conversion from CSV using standard `Read` and `Write` traits
//!
//! Only the domestic → international direction is supported. The boundary
//! between clearing code and serial number cannot be recovered from an
//! international account number.
//!
//! # Examples
//!
//! ## Converting a single account
//!
//! ```
//! use ypbank_swift::{convert, ReferenceTable};
//!
//! let result = convert(ReferenceTable::builtin(), Some("8327-9"), "12 345 678-9")?;
//! assert_eq!(result.swift_bank_code(), Some("800"));
//! assert_eq!(result.swift_account_number(), "00832790123456789");
//! # Ok::<(), ypbank_swift::Error>(())
//! ```
//!
//! ## Checking plausibility
//!
//! ```
//! use ypbank_swift::{valid_bank_code, valid_length, LengthCheck, ReferenceTable};
//!
//! let table = ReferenceTable::builtin();
//! assert!(valid_bank_code(table, "500", "00050011234567"));
//! assert_eq!(valid_length(table, "500", "00050011234567"), LengthCheck::Valid);
//! assert_eq!(valid_length(table, "600", "50011234567"), LengthCheck::Invalid);
//! ```

mod banks;
pub mod batch;
pub mod converter;
pub mod error;
pub mod logging;
pub mod reference_table;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use converter::{clean_field, convert, Converter};
pub use error::{Error, Result};
pub use reference_table::{BankFormatRecord, ReferenceTable};
pub use types::{BankFormat, ClearingRange, ClearingSource, ConversionResult, LengthCheck};
pub use validation::{valid_bank_code, valid_length};
